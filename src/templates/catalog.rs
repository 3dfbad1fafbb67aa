//! Built-in script templates, embedded at compile time from `templates/`

use serde::Serialize;

/// A script template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Template {
    /// Style keyword, as typed after `/script-`
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Source file under `templates/`
    pub file: &'static str,
    #[serde(skip)]
    pub body: &'static str,
}

/// All built-in templates, in menu order
pub const TEMPLATES: &[Template] = &[
    Template {
        id: "rpg",
        name: "RPG",
        file: "rpg.md",
        body: include_str!("../../templates/rpg.md"),
    },
    Template {
        id: "livro",
        name: "Livro",
        file: "livro.md",
        body: include_str!("../../templates/livro.md"),
    },
    Template {
        id: "cinema",
        name: "Cinema",
        file: "cinema.md",
        body: include_str!("../../templates/cinema.md"),
    },
    Template {
        id: "serie",
        name: "Séries",
        file: "serie.md",
        body: include_str!("../../templates/serie.md"),
    },
    Template {
        id: "biblia",
        name: "Bíblia de Série",
        file: "biblia_serie.md",
        body: include_str!("../../templates/biblia_serie.md"),
    },
    Template {
        id: "jogos",
        name: "Jogos",
        file: "jogos.md",
        body: include_str!("../../templates/jogos.md"),
    },
    Template {
        id: "quadrinhos",
        name: "Quadrinhos",
        file: "quadrinhos.md",
        body: include_str!("../../templates/quadrinhos.md"),
    },
    Template {
        id: "ia",
        name: "Obras de IA",
        file: "ia_obra.md",
        body: include_str!("../../templates/ia_obra.md"),
    },
];

/// Look up a template by its (lowercase) style keyword
pub fn template_for_style(style: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.id == style)
}
