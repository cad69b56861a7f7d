//! Lane module - the three parallel extraction paths

use std::fmt;

/// Extraction lane a source record belongs to
///
/// Each lane recognizes one kind of citation in a generation log:
/// - Pdf: documents from the tenant's PDF library
/// - Web: externally fetched web and news articles
/// - ViralPost: reference social posts used as style examples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lane {
    /// PDF documents consulted during generation
    Pdf,

    /// Web and news articles
    Web,

    /// Reference viral posts
    ViralPost,
}

impl Lane {
    /// All lanes, in bundle order
    pub const ALL: [Lane; 3] = [Lane::Pdf, Lane::Web, Lane::ViralPost];

    /// Get the lane name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Lane::Pdf => "pdf",
            Lane::Web => "web",
            Lane::ViralPost => "viral-post",
        }
    }

    /// Human-readable heading used by display layers
    pub fn heading(&self) -> &'static str {
        match self {
            Lane::Pdf => "PDF Documents",
            Lane::Web => "Web Articles",
            Lane::ViralPost => "Viral Posts",
        }
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_names() {
        let names: Vec<String> = Lane::ALL.iter().map(|lane| lane.to_string()).collect();
        assert_eq!(names, vec!["pdf", "web", "viral-post"]);
    }

    #[test]
    fn test_lane_headings() {
        assert_eq!(Lane::Web.heading(), "Web Articles");
        assert_eq!(Lane::ViralPost.heading(), "Viral Posts");
    }
}
