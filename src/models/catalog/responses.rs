use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaughtBy {
    pub professor_code: String,
    pub professor_name: String,
}

// list 接口的一行：开课实例及其授课教授
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModuleInstanceListItem {
    pub module_code: String,
    pub module_name: String,
    pub year: i32,
    pub semester: i32,
    pub taught_by: Vec<TaughtBy>,
}
