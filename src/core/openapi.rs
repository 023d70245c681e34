use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::activities::{dtos as activities_dtos, handlers as activities_handlers};
use crate::features::auth;
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::comments::{dtos as comments_dtos, handlers as comments_handlers};
use crate::features::contacts::{dtos as contacts_dtos, handlers as contacts_handlers};
use crate::features::members::{dtos as members_dtos, handlers as members_handlers};
use crate::features::news::{dtos as news_dtos, handlers as news_handlers};
use crate::features::organizations::{
    dtos as organizations_dtos, handlers as organizations_handlers,
};
use crate::features::roles::{dtos as roles_dtos, handlers as roles_handlers};
use crate::features::slides::{dtos as slides_dtos, handlers as slides_handlers};
use crate::features::testimonials::{
    dtos as testimonials_dtos, handlers as testimonials_handlers,
};
use crate::features::uploads::{dtos as uploads_dtos, handlers as uploads_handlers};
use crate::features::users::{dtos as users_dtos, handlers as users_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth::handlers::register,
        auth::handlers::login,
        auth::handlers::get_me,
        // Users
        users_handlers::list_users,
        users_handlers::get_user,
        users_handlers::update_user,
        users_handlers::delete_user,
        // Roles (admin)
        roles_handlers::list_roles,
        roles_handlers::get_role,
        roles_handlers::create_role,
        roles_handlers::update_role,
        roles_handlers::delete_role,
        // Organization
        organizations_handlers::get_public_organization,
        organizations_handlers::update_public_organization,
        organizations_handlers::delete_contact,
        // Contacts
        contacts_handlers::create_contact,
        contacts_handlers::list_contacts,
        // Testimonials
        testimonials_handlers::list_testimonials,
        testimonials_handlers::get_testimonial,
        testimonials_handlers::create_testimonial,
        testimonials_handlers::update_testimonial,
        testimonials_handlers::delete_testimonial,
        // News
        news_handlers::list_news,
        news_handlers::get_news,
        news_handlers::create_news,
        news_handlers::update_news,
        news_handlers::delete_news,
        news_handlers::list_news_comments,
        // Categories
        categories_handlers::list_categories,
        categories_handlers::get_category,
        categories_handlers::create_category,
        categories_handlers::update_category,
        categories_handlers::delete_category,
        // Comments
        comments_handlers::list_comments,
        comments_handlers::get_comment,
        comments_handlers::create_comment,
        comments_handlers::update_comment,
        comments_handlers::delete_comment,
        // Members
        members_handlers::list_members,
        members_handlers::get_member,
        members_handlers::create_member,
        members_handlers::update_member,
        members_handlers::delete_member,
        // Slides
        slides_handlers::list_slides,
        slides_handlers::get_slide,
        slides_handlers::create_slide,
        slides_handlers::update_slide,
        slides_handlers::delete_slide,
        // Activities
        activities_handlers::list_activities,
        activities_handlers::get_activity,
        activities_handlers::create_activity,
        activities_handlers::update_activity,
        activities_handlers::delete_activity,
        // Upload
        uploads_handlers::upload_file,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Auth
            auth::model::AuthenticatedUser,
            auth::dtos::RegisterRequestDto,
            auth::dtos::LoginRequestDto,
            auth::dtos::AuthResponseDto,
            auth::dtos::AuthUserDto,
            auth::dtos::MeResponseDto,
            ApiResponse<auth::dtos::AuthResponseDto>,
            ApiResponse<auth::dtos::MeResponseDto>,
            // Users
            users_dtos::UserResponseDto,
            users_dtos::UpdateUserDto,
            ApiResponse<users_dtos::UserResponseDto>,
            ApiResponse<Vec<users_dtos::UserResponseDto>>,
            // Roles
            roles_dtos::RoleResponseDto,
            roles_dtos::CreateRoleDto,
            roles_dtos::UpdateRoleDto,
            ApiResponse<roles_dtos::RoleResponseDto>,
            ApiResponse<Vec<roles_dtos::RoleResponseDto>>,
            // Organization
            organizations_dtos::OrganizationResponseDto,
            organizations_dtos::UpdateOrganizationDto,
            organizations_dtos::DeleteCountDto,
            ApiResponse<organizations_dtos::OrganizationResponseDto>,
            ApiResponse<organizations_dtos::DeleteCountDto>,
            // Contacts
            contacts_dtos::CreateContactDto,
            contacts_dtos::ContactResponseDto,
            contacts_dtos::ContactCreatedDto,
            ApiResponse<contacts_dtos::ContactCreatedDto>,
            ApiResponse<Vec<contacts_dtos::ContactResponseDto>>,
            // Testimonials
            testimonials_dtos::TestimonialResponseDto,
            testimonials_dtos::CreateTestimonialDto,
            testimonials_dtos::UpdateTestimonialDto,
            ApiResponse<testimonials_dtos::TestimonialResponseDto>,
            ApiResponse<Vec<testimonials_dtos::TestimonialResponseDto>>,
            // News
            news_dtos::NewsResponseDto,
            news_dtos::CreateNewsDto,
            news_dtos::UpdateNewsDto,
            ApiResponse<news_dtos::NewsResponseDto>,
            ApiResponse<Vec<news_dtos::NewsResponseDto>>,
            // Categories
            categories_dtos::CategoryResponseDto,
            categories_dtos::CategoryNameDto,
            categories_dtos::CreateCategoryDto,
            categories_dtos::UpdateCategoryDto,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            ApiResponse<Vec<categories_dtos::CategoryNameDto>>,
            // Comments
            comments_dtos::CommentResponseDto,
            comments_dtos::CommentBodyDto,
            comments_dtos::CreateCommentDto,
            comments_dtos::UpdateCommentDto,
            ApiResponse<comments_dtos::CommentResponseDto>,
            ApiResponse<Vec<comments_dtos::CommentResponseDto>>,
            ApiResponse<Vec<comments_dtos::CommentBodyDto>>,
            // Members
            members_dtos::MemberResponseDto,
            members_dtos::MemberCreatedDto,
            members_dtos::CreateMemberDto,
            members_dtos::UpdateMemberDto,
            ApiResponse<members_dtos::MemberResponseDto>,
            ApiResponse<members_dtos::MemberCreatedDto>,
            ApiResponse<Vec<members_dtos::MemberResponseDto>>,
            // Slides
            slides_dtos::SlideResponseDto,
            slides_dtos::CreateSlideDto,
            slides_dtos::UpdateSlideDto,
            ApiResponse<slides_dtos::SlideResponseDto>,
            ApiResponse<Vec<slides_dtos::SlideResponseDto>>,
            // Activities
            activities_dtos::ActivityResponseDto,
            activities_dtos::CreateActivityDto,
            activities_dtos::UpdateActivityDto,
            ApiResponse<activities_dtos::ActivityResponseDto>,
            ApiResponse<Vec<activities_dtos::ActivityResponseDto>>,
            // Upload
            uploads_dtos::UploadFileDto,
            uploads_dtos::UploadResponseDto,
            ApiResponse<uploads_dtos::UploadResponseDto>,
        )
    ),
    tags(
        (name = "auth", description = "Registration, login and the current identity"),
        (name = "users", description = "User management"),
        (name = "roles", description = "Role management (admin only)"),
        (name = "organization", description = "Public organization profile"),
        (name = "contacts", description = "Contact form submissions"),
        (name = "testimonials", description = "Testimonials"),
        (name = "news", description = "News and events"),
        (name = "categories", description = "News categories"),
        (name = "comments", description = "Comments on news"),
        (name = "members", description = "Organization members"),
        (name = "slides", description = "Home page slides"),
        (name = "activities", description = "Activities"),
        (name = "upload", description = "Image upload (admin only)"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Somos más API",
        version = "0.1.0",
        description = "API documentation for Somos más",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_resource_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/auth/login",
            "/users/{id}",
            "/roles",
            "/organization/public",
            "/organization/contacts/{id}",
            "/contacts",
            "/testimonials/{id}",
            "/news/{id}/comments",
            "/categories",
            "/comments/{id}",
            "/members",
            "/slides/{id}",
            "/activities/{id}",
            "/upload",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn test_info_modifier_overrides_title() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Custom".to_string(),
            version: "9.9.9".to_string(),
            description: "desc".to_string(),
        }
        .modify(&mut doc);
        assert_eq!(doc.info.title, "Custom");
        assert_eq!(doc.info.version, "9.9.9");
        assert!(doc
            .components
            .as_ref()
            .is_some_and(|c| c.security_schemes.contains_key("bearer_auth")));
    }
}
