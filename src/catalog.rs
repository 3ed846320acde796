//! Built-in portfolio command catalog
//!
//! The default descriptors and canned responses shown by the portfolio
//! terminal. The shared tables are built on first use and live for the rest
//! of the process.

use std::sync::Arc;

use chrono::Local;
use once_cell::sync::Lazy;

use crate::models::CommandDescriptor;
use crate::registry::{CommandRegistry, ResponseTable};

/// Names handled by the dispatcher itself rather than the response table
pub const BUILTIN_COMMANDS: [&str; 3] = ["help", "clear", "echo"];

static DEFAULT_REGISTRY: Lazy<Arc<CommandRegistry>> = Lazy::new(|| Arc::new(default_registry()));

static DEFAULT_RESPONSES: Lazy<Arc<ResponseTable>> = Lazy::new(|| Arc::new(default_responses()));

/// Process-wide default registry
pub fn shared_registry() -> Arc<CommandRegistry> {
    Arc::clone(&DEFAULT_REGISTRY)
}

/// Process-wide default response table
///
/// The `date` line is rendered when this is first called.
pub fn shared_responses() -> Arc<ResponseTable> {
    Arc::clone(&DEFAULT_RESPONSES)
}

fn default_descriptors() -> Vec<CommandDescriptor> {
    vec![
        CommandDescriptor::new("help", "Show all available commands"),
        CommandDescriptor::new("about", "Learn more about me"),
        CommandDescriptor::new("skills", "View my technical skills"),
        CommandDescriptor::new("projects", "See my featured projects"),
        CommandDescriptor::new("experience", "Check my work history"),
        CommandDescriptor::new("contact", "Get my contact information"),
        CommandDescriptor::new("social", "View my social media links"),
        CommandDescriptor::new("resume", "Download my resume"),
        CommandDescriptor::new("clear", "Clear the terminal screen"),
        CommandDescriptor::new("ls", "List directory contents"),
        CommandDescriptor::new("pwd", "Print working directory"),
        CommandDescriptor::new("whoami", "Display current user"),
        CommandDescriptor::new("date", "Show current date and time"),
        CommandDescriptor::new("echo", "Display a line of text").with_usage("[text]"),
        CommandDescriptor::new("fun-fact", "Get a random fun fact about me"),
        CommandDescriptor::new("coffee", "Virtual coffee break!"),
    ]
}

/// Build a fresh copy of the default registry
pub fn default_registry() -> CommandRegistry {
    CommandRegistry::new(default_descriptors()).unwrap_or_default()
}

fn lines(text: &[&str]) -> Vec<String> {
    text.iter().map(|line| line.to_string()).collect()
}

/// Build a fresh copy of the default response table
pub fn default_responses() -> ResponseTable {
    let mut table = ResponseTable::new();

    table.insert(
        "about",
        lines(&[
            "I'm Ikram Romane, a Full-Stack Developer.",
            "I specialize in building scalable web applications with modern technologies.",
            "Passionate about clean code, performance optimization, and great UX.",
            "",
        ]),
    );
    table.insert(
        "skills",
        lines(&[
            "Frontend: React, Next.js, TypeScript, Tailwind CSS",
            "Backend: Node.js, Python, PostgreSQL, GraphQL",
            "DevOps: AWS, Docker, Kubernetes, CI/CD",
            "Tools: Git, Jest, Figma, VS Code",
            "",
            "Specialties: Performance optimization, system architecture, team leadership",
        ]),
    );
    table.insert(
        "projects",
        lines(&[
            "Featured Projects:",
            "  • E-Commerce Platform - Full-stack with real-time features",
            "  • Task Management App - Collaborative with WebSockets",
            "  • AI Content Generator - GPT-4 integration",
            "  • Fitness Tracking App - React Native with analytics",
            "",
            "View details in the Projects section above ↑",
        ]),
    );
    table.insert(
        "experience",
        lines(&[
            "2022-Present: Senior Full-Stack Developer at TechCorp Solutions",
            "2020-2021: Full-Stack Developer at Startup Innovators",
            "2018-2020: Frontend Developer at Digital Agency XYZ",
            "",
            "Check the Experience section for more details ↑",
        ]),
    );
    table.insert(
        "contact",
        lines(&[
            "Email: alex@example.com",
            "Phone: +1 (555) 123-4567",
            "Location: San Francisco, CA (Remote available)",
            "",
            "Use the contact form above to send me a message ↑",
        ]),
    );
    table.insert(
        "social",
        lines(&[
            "GitHub:   github.com/alexchen",
            "LinkedIn: linkedin.com/in/alexchen",
            "Twitter:  twitter.com/alexchen",
            "Dev.to:   dev.to/alexchen",
        ]),
    );
    table.insert(
        "resume",
        lines(&[
            "Downloading resume... (simulated)",
            "",
            "✅ Resume downloaded successfully!",
            "In a real scenario, this would trigger a PDF download.",
        ]),
    );
    table.insert(
        "ls",
        lines(&[
            "about.txt",
            "skills.md",
            "projects/",
            "experience.json",
            "contact.md",
            "resume.pdf",
            "social_links/",
        ]),
    );
    table.insert("pwd", lines(&["/home/alex/portfolio"]));
    table.insert("whoami", lines(&["alexchen"]));
    table.insert(
        "date",
        vec![Local::now().format("%m/%d/%Y, %I:%M:%S %p").to_string()],
    );
    table.insert(
        "fun-fact",
        lines(&[
            "I once deployed a critical fix while hiking using my phone's hotspot!",
            "I've contributed to 50+ open source projects.",
            "I can solve a Rubik's cube in under 2 minutes.",
            "My first website was built with Notepad in 2010.",
        ]),
    );
    table.insert(
        "coffee",
        lines(&[
            "☕ Enjoying a virtual coffee break!",
            "",
            "        )  (",
            "         ( )",
            "       .______.",
            "      |      |]",
            "      \\      /",
            "       `----'",
            "",
            "Need a real coffee? Let's connect!",
        ]),
    );

    table
}
