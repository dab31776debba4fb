//! Auth Adapter - Google 服务账号认证

mod service_account;

pub use service_account::{ServiceAccountKey, ServiceAccountTokenSource, CLOUD_PLATFORM_SCOPE};

#[cfg(test)]
pub(crate) use service_account::test_key;
