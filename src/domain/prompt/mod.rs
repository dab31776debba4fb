//! Prompt Context - 提示音生成上下文

mod errors;
mod value_objects;
mod work_item;

pub use errors::WorkItemError;
pub use value_objects::{AudioEncoding, PromptType, SynthesisConfig, VoiceGender, VoiceSelection};
pub use work_item::WorkItem;
