//! Data models module
//!
//! This module contains the typed mirrors of the REST resources exposed by
//! the hostel API, plus the pagination envelope shared by list endpoints.
//! Entities carry an `id`, descriptive fields, optional relation objects
//! and `created_at`/`updated_at` timestamps; request DTOs are separate
//! structs so partial updates serialize only the fields being changed.

pub mod auth;
pub mod block;
pub mod chat;
pub mod checkinout;
pub mod complain;
pub mod finance;
pub mod notice;
pub mod pagination;
pub mod room;
pub mod staff;
pub mod student;
pub mod upload;

pub use auth::{AccountUser, LoginRequest, LoginResponse};
pub use block::{Block, CreateBlockRequest, UpdateBlockRequest};
pub use chat::{ChatMessage, Conversation, SendMessageRequest, UnreadCount};
pub use checkinout::{
    CheckInCheckOut, CheckOutRequest, CheckStatus, CheckoutRule, CreateCheckoutRuleRequest,
    RuleTarget, UpdateCheckoutRuleRequest,
};
pub use complain::{Complain, ComplainStatus, CreateComplainRequest, UpdateComplainRequest};
pub use finance::{
    CreateIncomeRequest, CreateSupplierRequest, Income, Supplier, UpdateIncomeRequest,
    UpdateSupplierRequest,
};
pub use notice::{CreateNoticeRequest, Notice, TargetType, UpdateNoticeRequest};
pub use pagination::Paginated;
pub use room::{CreateRoomRequest, Room, RoomStatus, UpdateRoomRequest};
pub use staff::{CreateStaffRequest, Staff, UpdateStaffRequest};
pub use student::{CreateStudentRequest, Student, UpdateStudentRequest};
pub use upload::UploadFile;
