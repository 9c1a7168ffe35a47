//! BenchPulse 도메인 모델.
//!
//! 스토어, 네트워크 어댑터, 앱 진입점이 공유하는 데이터 구조체를 정의한다.

pub mod command;
pub mod observation;
pub mod session;
pub mod subscription;
