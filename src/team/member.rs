use serde::{Deserialize, Serialize};

/// Identifier of a team member, unique within a roster.
pub type MemberId = u32;

/// Focal point used when an entry does not specify one (centered).
pub const DEFAULT_FOCAL_X: f32 = 50.0;

/// A single person shown in the team showcase.
///
/// Every field except `id` may be omitted in authored data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: MemberId,
    #[serde(default)]
    pub name: String,
    /// Role and short biography, arbitrary length.
    #[serde(default)]
    pub role: String,
    /// Asset reference for the card backdrop.
    #[serde(default)]
    pub image: Option<String>,
    /// Horizontal crop anchor for the backdrop, in percent.
    #[serde(default)]
    pub focal_x: Option<f32>,
}

impl TeamMember {
    pub fn new(id: MemberId, name: &str, role: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            role: role.to_string(),
            image: None,
            focal_x: None,
        }
    }

    #[cfg(test)]
    pub fn with_image(mut self, image: &str) -> Self {
        self.image = Some(image.to_string());
        self
    }

    #[cfg(test)]
    pub fn with_focal_x(mut self, focal_x: f32) -> Self {
        self.focal_x = Some(focal_x);
        self
    }

    /// Effective focal point, clamped to `0..=100`.
    pub fn focal_x(&self) -> f32 {
        match self.focal_x {
            Some(x) if x.is_finite() => x.clamp(0.0, 100.0),
            _ => DEFAULT_FOCAL_X,
        }
    }

    /// File name of the image reference, used as the backdrop label.
    pub fn image_label(&self) -> Option<&str> {
        let image = self.image.as_deref()?.trim();
        if image.is_empty() {
            return None;
        }
        image.rsplit('/').next().filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focal_x_defaults_to_center() {
        let member = TeamMember::new(1, "Ada", "CEO");
        assert_eq!(member.focal_x(), 50.0);
    }

    #[test]
    fn test_focal_x_is_clamped() {
        assert_eq!(TeamMember::new(1, "A", "").with_focal_x(140.0).focal_x(), 100.0);
        assert_eq!(TeamMember::new(1, "A", "").with_focal_x(-3.0).focal_x(), 0.0);
        assert_eq!(
            TeamMember::new(1, "A", "").with_focal_x(f32::NAN).focal_x(),
            DEFAULT_FOCAL_X
        );
    }

    #[test]
    fn test_image_label() {
        let member = TeamMember::new(1, "Ada", "").with_image("team/ada.jpg");
        assert_eq!(member.image_label(), Some("ada.jpg"));

        let bare = TeamMember::new(2, "Bo", "").with_image("bo.png");
        assert_eq!(bare.image_label(), Some("bo.png"));

        let blank = TeamMember::new(3, "Cy", "").with_image("   ");
        assert_eq!(blank.image_label(), None);

        let dir = TeamMember::new(4, "Di", "").with_image("team/");
        assert_eq!(dir.image_label(), None);

        assert_eq!(TeamMember::new(5, "Ed", "").image_label(), None);
    }

    #[test]
    fn test_deserialize_missing_fields() {
        let member: TeamMember = serde_json::from_str(r#"{"id": 7}"#).expect("deserialize");
        assert_eq!(member.id, 7);
        assert!(member.name.is_empty());
        assert!(member.role.is_empty());
        assert!(member.image.is_none());
        assert_eq!(member.focal_x(), DEFAULT_FOCAL_X);
    }
}
