use crate::domain::model::TemplateContext;
use crate::utils::error::{ProjError, Result, Step};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tera::Tera;

/// A template bundled into the binary together with where it is written,
/// relative to the project directory.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedTemplate {
    pub name: &'static str,
    pub source: &'static str,
    pub target: &'static [&'static str],
}

impl EmbeddedTemplate {
    pub fn target_path(&self, project_dir: &Path) -> PathBuf {
        self.target
            .iter()
            .fold(project_dir.to_path_buf(), |path, part| path.join(part))
    }
}

pub const MAIN_GO: EmbeddedTemplate = EmbeddedTemplate {
    name: "main.go",
    source: include_str!("../../templates/main.go.tera"),
    target: &["main.go"],
};

pub const CMD_GO: EmbeddedTemplate = EmbeddedTemplate {
    name: "cmd.go",
    source: include_str!("../../templates/cmd.go.tera"),
    target: &["cmd", "cmd.go"],
};

/// Rendered in this order.
pub const TEMPLATES: [EmbeddedTemplate; 2] = [MAIN_GO, CMD_GO];

pub fn to_tera_context(ctx: &TemplateContext) -> Result<tera::Context> {
    tera::Context::from_serialize(ctx).map_err(|source| ProjError::Template {
        template: "context".to_string(),
        source,
    })
}

/// Writes every embedded template into `project_dir`, stopping at the first
/// failure. Returns the written paths.
pub fn write_templates(ctx: &TemplateContext, project_dir: &Path) -> Result<Vec<PathBuf>> {
    let tera_ctx = to_tera_context(ctx)?;
    let mut written = Vec::with_capacity(TEMPLATES.len());

    for template in &TEMPLATES {
        let path = template.target_path(project_dir);
        render_template_file(template.name, template.source, &tera_ctx, &path)?;
        tracing::debug!("wrote {}", path.display());
        written.push(path);
    }

    Ok(written)
}

/// Creates (or truncates) `path`, then compiles `source` and streams the
/// rendered output into it. On failure the file is left as it is.
pub fn render_template_file(
    name: &str,
    source: &str,
    ctx: &tera::Context,
    path: &Path,
) -> Result<()> {
    let file = File::create(path).map_err(|source| ProjError::Io {
        step: Step::WriteTemplates,
        path: path.to_path_buf(),
        source,
    })?;

    let mut tera = Tera::default();
    tera.add_raw_template(name, source)
        .map_err(|source| ProjError::Template {
            template: name.to_string(),
            source,
        })?;

    let mut writer = BufWriter::new(file);
    tera.render_to(name, ctx, &mut writer)
        .map_err(|source| ProjError::Template {
            template: name.to_string(),
            source,
        })?;

    writer.flush().map_err(|source| ProjError::Io {
        step: Step::WriteTemplates,
        path: path.to_path_buf(),
        source,
    })
}
