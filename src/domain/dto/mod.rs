//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 명확히 정의합니다.
//!
//! ## 설계 원칙
//!
//! - **유효성 검증 내장**: 요청 DTO는 `validator` derive로 형식 규칙을 선언합니다.
//! - **도메인 분리**: 요청 DTO는 도메인 타입(`UserChanges` 등)으로 변환된 뒤 서비스에 전달됩니다.
//! - **보안**: 응답 DTO에는 비밀번호 해시가 존재하지 않습니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! └── users/
//!     ├── request/
//!     │   ├── create_user.rs   # 회원가입
//!     │   └── update_user.rs   # 정보 수정 (제한된 필드 집합)
//!     └── response/
//!         └── user_response.rs # 사용자, 통계, 존재 여부 응답
//! ```

pub mod users;

pub use users::*;
