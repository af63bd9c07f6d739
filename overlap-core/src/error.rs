use snafu::prelude::*;

pub type Result<T, E = BoxError> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum BoxError {
    #[snafu(display("{} can not be calculated", missing))]
    PositionUncomputable { missing: String },
    #[snafu(display("{} can not be calculated", missing))]
    ExtentUncomputable { missing: String },
    #[snafu(display("`bottom` ({}) is less than `top` ({})", bottom, top))]
    InvertedVerticalExtent { top: f64, bottom: f64 },
    #[snafu(display("`right` ({}) is less than `left` ({})", right, left))]
    InvertedHorizontalExtent { left: f64, right: f64 },
    #[snafu(display("Parse box json error: {}", source))]
    Json { source: serde_json::Error },
}

/// Joins the names of unresolved fields, e.g. "`top` and `left`".
pub(crate) fn missing_fields(fields: &[(&str, Option<f64>)]) -> String {
    fields
        .iter()
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| format!("`{name}`"))
        .collect::<Vec<_>>()
        .join(" and ")
}
