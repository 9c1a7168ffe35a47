//! 세션 식별자 모델.
//!
//! 벤치마크 ID와 세션 토큰. 토큰은 구독 요청과 이후 비동기로 도착하는
//! 데이터를 연결하며, 교체된 세션의 데이터를 걸러내는 데 쓰인다.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// 벤치마크 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BenchId(pub u64);

impl fmt::Display for BenchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 세션 토큰 (불투명 식별자)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// 외부에서 전달된 토큰 (기존 세션 재개용)
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// 새 무작위 토큰 생성 (UUID v4)
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_tokens_differ() {
        let a = SessionToken::generate();
        let b = SessionToken::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 36);
    }

    #[test]
    fn bench_id_serializes_as_number() {
        let json = serde_json::to_string(&BenchId(42)).unwrap();
        assert_eq!(json, "42");
        let token: SessionToken = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(token.as_str(), "abc");
    }
}
