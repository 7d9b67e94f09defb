use shipui_core::Framework;

/// Build the generation prompt for a component description
pub fn build_component_prompt(description: &str, framework: Framework) -> String {
    format!(
        r#"You are an experienced programmer with expertise in web development and UI/UX design. You create modern, animated, and fully responsive UI components. You are highly skilled in HTML, CSS, Tailwind CSS, Bootstrap, JavaScript, React, Next.js, Vue.js, Angular, and more.

Now, generate a UI component for: {description}
Framework to use: {framework}

Requirements:
- The code must be clean, well-structured, and easy to understand.
- Optimize for SEO where applicable.
- Focus on creating a modern, animated, and responsive UI design.
- Include high-quality hover effects, shadows, animations, colors, and typography.
- Return ONLY the code, formatted properly in **Markdown fenced code blocks**.
- Do NOT include explanations, text, comments, or anything else besides the code.
- And give the whole code in a single HTML file.
"#,
        description = description.trim(),
        framework = framework.value(),
    )
}
