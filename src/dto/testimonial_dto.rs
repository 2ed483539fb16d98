//! DTOs de testimonios

use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestimonialRequest {
    #[validate(length(min = 1, max = 100, message = "Name is required (max 100 characters)"))]
    pub name: String,
    #[validate(length(min = 1, max = 100, message = "Role is required (max 100 characters)"))]
    pub role: String,
    #[validate(length(min = 1, max = 1000, message = "Content is required (max 1000 characters)"))]
    pub content: String,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i32,
    pub image: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTestimonialRequest {
    #[validate(length(min = 1, max = 100, message = "Name is required (max 100 characters)"))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 100, message = "Role is required (max 100 characters)"))]
    pub role: Option<String>,
    #[validate(length(min = 1, max = 1000, message = "Content is required (max 1000 characters)"))]
    pub content: Option<String>,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: Option<i32>,
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        let request = CreateTestimonialRequest {
            name: "Rahul".to_string(),
            role: "Customer".to_string(),
            content: "Great service".to_string(),
            rating: 6,
            image: None,
        };
        assert!(request.validate().is_err());

        let request = CreateTestimonialRequest {
            rating: 5,
            ..request
        };
        assert!(request.validate().is_ok());
    }
}
