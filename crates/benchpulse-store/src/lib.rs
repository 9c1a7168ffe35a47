//! # benchpulse-store
//!
//! 실시간 벤치마크 메트릭 스토어.
//! 서버가 스트리밍하는 탭 구분 관측값 배치를 파싱하고, 현재 세션 토큰으로
//! 검증한 뒤 메트릭별 시계열에 세션 기준 상대 시각으로 누적한다.
//!
//! - [`parser`] — 원시 텍스트 배치 → 관측값 (잘못된 줄은 개별 폐기)
//! - [`session`] — 현재 세션 식별 (벤치 ID, 토큰, 로드 플래그)
//! - [`series`] — 메트릭 이름 → 순서 보존 시계열, 기준 시각 고정
//! - [`store`] — 위 셋을 묶는 수집 파이프라인
//! - [`observer`] — 변경 알림 콜백 레지스트리
//! - [`actor`] — 명령 큐를 소비하는 단일 소유자 액터

pub mod actor;
pub mod observer;
pub mod parser;
pub mod series;
pub mod session;
pub mod store;
