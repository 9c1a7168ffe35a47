//! # benchpulse-core
//!
//! BenchPulse 도메인 모델, 포트(trait) 정의, 에러 타입.
//! 모든 크레이트가 공유하는 핵심 타입과 인터페이스를 제공한다.
//!
//! ## 구조
//!
//! - [`models`] — 도메인 데이터 구조체 (관측값, 세션 식별자, 스토어 명령)
//! - [`ports`] — 외부 협력자 포트 인터페이스 (async_trait)
//! - [`error`] — 핵심 에러 타입 (thiserror)
//! - [`config`] — 애플리케이션 설정 구조체
//! - [`config_manager`] — 설정 파일 로드

pub mod config;
pub mod config_manager;
pub mod error;
pub mod models;
pub mod ports;
