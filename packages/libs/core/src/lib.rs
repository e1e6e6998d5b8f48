//! shift-core: 레거시 스키마 → ORM 매핑 변환 핵심 라이브러리
//!
//! 이 크레이트는 CLI와 외부 호출자가 공유하는 변환 로직을 제공합니다.
//!
//! # 모듈 구조
//!
//! - `legacy`: 레거시 선언 스키마(YAML) 입력 모델과 로더
//! - `mapping`: 타입/컬럼/테이블/인덱스/관계 매핑과 클래스 변환기
//! - `id`: 식별자 생성 전략
//! - `error`: 공통 에러 타입

pub mod error;
pub mod id;
pub mod legacy;
pub mod mapping;

pub use error::{Error, Result};
