//! The fixed slide content.
//!
//! The deck describes a ServiceNow incident-management web application:
//! an opening title slide, eight content slides, and a closing slide.
//! Bullet text is reproduced verbatim, including the box-drawing
//! architecture diagram and the blank spacer lines.

use crate::pptx::Presentation;

use super::builder::DeckBuilder;

/// Output filename, written into the current working directory.
pub const OUTPUT_FILE: &str = "ServiceNow_Incident_Management.pptx";

const CONTENT_SLIDES: &[(&str, &[&str])] = &[
    (
        "Project Overview",
        &[
            "📋 Web-based platform to manage ServiceNow incidents",
            "🔧 Complete CRUD operations (Create, Read, Update, Delete)",
            "🔐 OAuth 2.0 PKCE authentication",
            "🎨 Responsive UI with dark mode support",
            "⚡ Real-time synchronization with ServiceNow",
            "✅ Production-ready with error handling",
        ],
    ),
    (
        "Technology Stack",
        &[
            "Frontend: React 19 + Vite + Material-UI",
            "Backend: Node.js + Express.js",
            "Authentication: OAuth 2.0 PKCE",
            "API Client: Axios",
            "Database: ServiceNow Instance",
            "Styling: Material-UI Components + Dark Mode",
        ],
    ),
    (
        "System Architecture",
        &[
            "┌─────────────────────────────────────┐",
            "│  React Frontend (http://localhost:5173)",
            "└──────────────────┬──────────────────┘",
            "                   │",
            "┌──────────────────▼──────────────────┐",
            "│  Express Backend (http://localhost:3001)",
            "└──────────────────┬──────────────────┘",
            "                   │",
            "┌──────────────────▼──────────────────┐",
            "│  ServiceNow Instance (OAuth + REST API)",
            "└─────────────────────────────────────┘",
        ],
    ),
    (
        "Key Features",
        &[
            "✓ Create Incidents - short_description, impact, urgency",
            "✓ View Incidents - grid layout with incident cards",
            "✓ Edit Incidents - update all incident details",
            "✓ Delete Incidents - with confirmation dialog",
            "✓ Dark Mode - toggle light/dark theme",
            "✓ Error Handling - user-friendly alerts",
            "✓ Session Management - secure OAuth flow",
        ],
    ),
    (
        "Frontend Components",
        &[
            "Home.jsx - Main incident management interface",
            "  • Incident list display",
            "  • Create/Edit/Delete dialogs",
            "  • Success notifications",
            "",
            "App.jsx - Navigation and header",
            "  • AppBar with theme toggle",
            "  • Route management",
            "",
            "AuthProvider.jsx - Authentication context",
        ],
    ),
    (
        "Backend Implementation",
        &[
            "OAuth 2.0 PKCE Flow:",
            "  • Secure authentication with ServiceNow",
            "  • Token refresh on expiration",
            "",
            "API Endpoints:",
            "  • GET /api/incidents - List all",
            "  • POST /api/incidents - Create",
            "  • PUT /api/incidents/:id - Update",
            "  • DELETE /api/incidents/:id - Delete",
        ],
    ),
    (
        "Setup Instructions",
        &[
            "Backend Setup:",
            "  $ cd BFF",
            "  $ npm install",
            "  $ npm start  (port 3001)",
            "",
            "Frontend Setup:",
            "  $ cd client",
            "  $ npm install",
            "  $ npm run dev  (port 5173)",
            "",
            "Environment: Configure .env with OAuth credentials",
        ],
    ),
    (
        "API Example: Create Incident",
        &[
            "Request:",
            "  POST /api/incidents",
            "  {",
            "    \"short_description\": \"System down\",",
            "    \"impact\": 1,",
            "    \"urgency\": 1",
            "  }",
            "",
            "Response:",
            "  { \"result\": { \"sys_id\": \"...\", \"number\": \"INC001\" } }",
        ],
    ),
];

/// Build the complete ten-slide deck.
pub fn build_deck() -> Presentation {
    let mut builder = DeckBuilder::new();

    builder.add_title_slide("ServiceNow Incident Management", "Full-Stack Web Application");
    for &(title, bullets) in CONTENT_SLIDES {
        builder.add_content_slide(title, bullets);
    }
    builder.add_title_slide("Thank You!", "Questions? | GitHub: project_capstone");

    let mut presentation = builder.into_presentation();
    presentation.set_title("ServiceNow Incident Management");
    presentation
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_texts(pres: &Presentation, slide: usize, shape: usize) -> Vec<String> {
        pres.slide(slide).unwrap().shapes()[shape]
            .text_frame()
            .unwrap()
            .paragraphs()
            .iter()
            .map(|p| p.text().to_string())
            .collect()
    }

    #[test]
    fn test_deck_has_ten_slides_in_order() {
        let pres = build_deck();
        assert_eq!(pres.slide_count(), 10);

        // Opening and closing title slides
        assert_eq!(
            frame_texts(&pres, 0, 0),
            vec!["ServiceNow Incident Management"]
        );
        assert_eq!(frame_texts(&pres, 0, 1), vec!["Full-Stack Web Application"]);
        assert_eq!(frame_texts(&pres, 9, 0), vec!["Thank You!"]);
        assert_eq!(
            frame_texts(&pres, 9, 1),
            vec!["Questions? | GitHub: project_capstone"]
        );

        // Content slide titles in between
        let titles: Vec<String> = (1..=8).map(|i| frame_texts(&pres, i, 1).remove(0)).collect();
        assert_eq!(
            titles,
            vec![
                "Project Overview",
                "Technology Stack",
                "System Architecture",
                "Key Features",
                "Frontend Components",
                "Backend Implementation",
                "Setup Instructions",
                "API Example: Create Incident",
            ]
        );
    }

    #[test]
    fn test_project_overview_bullets() {
        let pres = build_deck();
        let bullets = frame_texts(&pres, 1, 2);
        assert_eq!(
            bullets,
            vec![
                "📋 Web-based platform to manage ServiceNow incidents",
                "🔧 Complete CRUD operations (Create, Read, Update, Delete)",
                "🔐 OAuth 2.0 PKCE authentication",
                "🎨 Responsive UI with dark mode support",
                "⚡ Real-time synchronization with ServiceNow",
                "✅ Production-ready with error handling",
            ]
        );
    }

    #[test]
    fn test_setup_instructions_keeps_spacer_lines() {
        let pres = build_deck();
        let bullets = frame_texts(&pres, 7, 2);
        assert_eq!(bullets.len(), 11);
        assert_eq!(bullets[1], "  $ cd BFF");
        assert_eq!(bullets[4], "");
        assert_eq!(bullets[9], "");
        assert_eq!(
            bullets[10],
            "Environment: Configure .env with OAuth credentials"
        );
    }

    #[test]
    fn test_architecture_diagram_survives_verbatim() {
        let pres = build_deck();
        let bullets = frame_texts(&pres, 3, 2);
        assert_eq!(bullets.len(), 11);
        assert_eq!(bullets[0], "┌─────────────────────────────────────┐");
        assert_eq!(bullets[3], "                   │");
    }

    #[test]
    fn test_document_title_is_set() {
        let pres = build_deck();
        assert_eq!(pres.title(), Some("ServiceNow Incident Management"));
    }
}
