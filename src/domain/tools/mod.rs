//! Tools module - the set of tool names a user has saved.

mod tool_set;

pub use tool_set::{ToolName, ToolSet, MAX_TOOL_NAME_LEN};
