//! Prompt Context - WorkItem
//!
//! 输入表中的一行：输出文件名 + 待合成文本。
//! 加载时创建，由一个派发任务恰好消费一次。

use std::path::Path;

use super::WorkItemError;

/// 单个工作项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    output_name: String,
    text_content: String,
}

impl WorkItem {
    pub fn new(output_name: impl Into<String>, text_content: impl Into<String>) -> Self {
        Self {
            output_name: output_name.into(),
            text_content: text_content.into(),
        }
    }

    pub fn output_name(&self) -> &str {
        &self.output_name
    }

    pub fn text_content(&self) -> &str {
        &self.text_content
    }

    /// 输出文件名: `{output_name}.{output_format}`
    ///
    /// 扩展名按配置原样拼接，不做大小写转换。
    pub fn file_name(&self, output_format: &str) -> String {
        format!("{}.{}", self.output_name, output_format)
    }

    /// 校验 output_name 可作为单个路径组件使用
    pub fn validate_name(&self) -> Result<(), WorkItemError> {
        let name = self.output_name.as_str();
        if name.is_empty() {
            return Err(WorkItemError::EmptyName);
        }
        if name == "." || name == ".." || name.contains(['/', '\\']) {
            return Err(WorkItemError::InvalidName(name.to_string()));
        }
        if Path::new(name).is_absolute() {
            return Err(WorkItemError::InvalidName(name.to_string()));
        }
        Ok(())
    }

    /// 拆分为 (output_name, text_content)
    pub fn into_parts(self) -> (String, String) {
        (self.output_name, self.text_content)
    }
}
