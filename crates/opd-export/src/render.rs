use std::path::{Path, PathBuf};

use opd_core::file_names;
use opd_core::models::clinic::ClinicProfile;
use opd_core::models::visit::VisitRecord;
use serde::Serialize;
use tera::{Context, Tera};
use tracing::info;

use crate::error::ExportError;
use crate::layout::{SlipLayout, wrap_text};

/// Thermal-printer slip shipped with the desk.
pub const DEFAULT_SLIP_TEMPLATE: &str = include_str!("../templates/slip.txt.tera");

const DEFAULT_SLIP_NAME: &str = "slip.txt";

/// Variables available to slip templates.
#[derive(Debug, Serialize)]
struct SlipContext<'a> {
    clinic: &'a ClinicProfile,
    visit: &'a VisitRecord,
    /// e.g. `Oct 19, 2026`.
    visit_date: String,
    /// Weight without a trailing `.0`.
    weight: String,
    heavy_rule: String,
    light_rule: String,
}

/// Render a Tera template with an arbitrary context.
///
/// The `template_content` is the raw template string (Jinja2 syntax).
pub fn render_template(
    template_name: &str,
    template_content: &str,
    context: &Context,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let rendered = tera.render(template_name, context)?;
    Ok(rendered)
}

/// Render the default slip for a visit.
pub fn render_slip(
    clinic: &ClinicProfile,
    visit: &VisitRecord,
    layout: &SlipLayout,
) -> Result<String, ExportError> {
    render_slip_with(DEFAULT_SLIP_NAME, DEFAULT_SLIP_TEMPLATE, clinic, visit, layout)
}

/// Render a visit through a custom slip template, then wrap it to the
/// layout's width.
///
/// Templates see `clinic`, `visit`, `visit_date`, `weight`, `heavy_rule`
/// and `light_rule`.
pub fn render_slip_with(
    template_name: &str,
    template_content: &str,
    clinic: &ClinicProfile,
    visit: &VisitRecord,
    layout: &SlipLayout,
) -> Result<String, ExportError> {
    let slip = SlipContext {
        clinic,
        visit,
        visit_date: visit.visit_date.strftime("%b %d, %Y").to_string(),
        weight: format!("{}", visit.weight),
        heavy_rule: layout.heavy_rule(),
        light_rule: layout.light_rule(),
    };

    // Convert the slip to a Tera context via serde_json
    let value = serde_json::to_value(&slip)?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = render_template(template_name, template_content, &context)?;
    Ok(wrap_text(&rendered, layout.width))
}

/// Render the default slip and write it into `dir`. Returns the path
/// written.
pub fn write_slip(
    dir: &Path,
    clinic: &ClinicProfile,
    visit: &VisitRecord,
    layout: &SlipLayout,
) -> Result<PathBuf, ExportError> {
    let slip = render_slip(clinic, visit, layout)?;
    let path = dir.join(file_names::slip(&visit.patient_id, visit.visit_date));

    std::fs::create_dir_all(dir)
        .and_then(|_| std::fs::write(&path, slip.as_bytes()))
        .map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;

    info!(path = %path.display(), patient_id = %visit.patient_id, "slip written");
    Ok(path)
}
