mod member_service;

pub use member_service::MemberService;
