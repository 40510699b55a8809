//! Starter templates and prompt suggestions.

use serde::Serialize;

/// A named starter project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Prompt sent to the provider when the template is loaded.
    pub prompt: &'static str,
}

/// An example prompt with its category label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub category: &'static str,
    pub text: &'static str,
}

/// Template used for unknown ids.
pub const DEFAULT_TEMPLATE: &str = "blog";

pub const TEMPLATES: [Template; 4] = [
    Template {
        id: "ecommerce",
        name: "E-commerce",
        description: "Product catalog with cart",
        prompt: "Create a complete e-commerce store with product catalog, shopping cart, user accounts, order management, and payment processing",
    },
    Template {
        id: "blog",
        name: "Blog System",
        description: "Content management blog",
        prompt: "Build a professional blog system with user authentication, post management, categories, comments, and admin dashboard",
    },
    Template {
        id: "crm",
        name: "User Management",
        description: "Authentication & profiles",
        prompt: "Generate a customer relationship management system with user roles, contact management, and reporting features",
    },
    Template {
        id: "chat",
        name: "Chat App",
        description: "Real-time messaging",
        prompt: "Create a real-time chat application with user authentication, private messaging, and group chat functionality",
    },
];

pub const SUGGESTIONS: [Suggestion; 6] = [
    Suggestion {
        category: "Blog",
        text: "Create a complete blog system with user authentication and admin panel",
    },
    Suggestion {
        category: "E-commerce",
        text: "Build an e-commerce store with product catalog, cart, and checkout",
    },
    Suggestion {
        category: "Auth",
        text: "Generate a user management system with roles and permissions",
    },
    Suggestion {
        category: "Productivity",
        text: "Create a task management application with team collaboration",
    },
    Suggestion {
        category: "Business",
        text: "Build a real estate listing platform with search and filters",
    },
    Suggestion {
        category: "Support",
        text: "Generate a customer support ticket system with live chat",
    },
];

/// Look up a template by id. Unknown ids resolve to the blog template.
pub fn resolve_template(id: &str) -> &'static Template {
    let id = id.trim();
    TEMPLATES
        .iter()
        .find(|t| t.id.eq_ignore_ascii_case(id))
        .or_else(|| TEMPLATES.iter().find(|t| t.id == DEFAULT_TEMPLATE))
        .unwrap_or(&TEMPLATES[1])
}
