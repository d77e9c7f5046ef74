//! Bakes the current fruit control points into a standalone WGSL shader.
//!
//! The bundled template is the regular fruit shader with the control
//! points lifted out of the uniform block into named constants, so the
//! saved file reproduces the shape without any host-side configuration.

use std::path::Path;

use glam::Vec3;

/// The fruit shader with `{{p0}}`..`{{p3}}` placeholders for the control
/// point constants.
pub const FRUIT_TEMPLATE: &str = include_str!("../templates/fruit_preset.wgsl");

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("placeholder {{{{{name}}}}} not found in template")]
    MissingPlaceholder { name: String },
}

/// A snapshot of the curve control points, ready to be baked into a
/// shader source file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShaderPreset {
    pub points: [Vec3; 4],
}

impl ShaderPreset {
    pub fn new(points: [Vec3; 4]) -> Self {
        Self { points }
    }

    /// Renders the bundled template with the preset's control points.
    pub fn render(&self) -> Result<String, ExportError> {
        self.render_template(FRUIT_TEMPLATE)
    }

    /// Substitutes `{{p0}}`..`{{p3}}` in `template`.
    ///
    /// Every placeholder must be present, a template missing one would
    /// silently produce a shader with a hole in it.
    pub fn render_template(&self, template: &str) -> Result<String, ExportError> {
        let mut output = template.to_owned();

        for (i, point) in self.points.iter().enumerate() {
            let name = format!("p{i}");
            let placeholder = format!("{{{{{name}}}}}");

            if !output.contains(&placeholder) {
                return Err(ExportError::MissingPlaceholder { name });
            }

            output = output.replace(&placeholder, &format_vec3(*point));
        }

        Ok(output)
    }

    /// Renders the bundled template and writes it to `path`.
    pub fn write_to(&self, path: &Path) -> Result<(), ExportError> {
        let source = self.render()?;
        std::fs::write(path, source)?;
        Ok(())
    }
}

fn format_vec3(v: Vec3) -> String {
    format!("vec3<f32>({:.3}, {:.3}, {:.3})", v.x, v.y, v.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preset() -> ShaderPreset {
        ShaderPreset::new([
            Vec3::new(0.0, 0.0, -0.3),
            Vec3::new(1.0, 0.0, -0.7),
            Vec3::new(1.0, 0.0, 0.3),
            Vec3::new(0.0, 0.0, 1.0),
        ])
    }

    #[test]
    fn substitutes_every_placeholder() {
        let rendered = preset()
            .render_template("a {{p0}} b {{p1}} c {{p2}} d {{p3}}")
            .unwrap();

        assert_eq!(
            rendered,
            "a vec3<f32>(0.000, 0.000, -0.300) b vec3<f32>(1.000, 0.000, -0.700) \
             c vec3<f32>(1.000, 0.000, 0.300) d vec3<f32>(0.000, 0.000, 1.000)"
        );
    }

    #[test]
    fn missing_placeholder_is_an_error() {
        let err = preset()
            .render_template("only {{p0}} and {{p1}} here {{p3}}")
            .unwrap_err();

        match err {
            ExportError::MissingPlaceholder { name } => assert_eq!(name, "p2"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn bundled_template_renders() {
        let rendered = preset().render().unwrap();

        assert!(!rendered.contains("{{"));
        assert!(rendered.contains("vec3<f32>(0.000, 0.000, -0.300)"));
    }

    #[test]
    fn bundled_template_shades_with_the_vertex_view_position() {
        let rendered = preset().render().unwrap();

        // The view vector comes from the interpolated vertex position,
        // not the position recomputed for the derivative normal.
        assert!(rendered.contains("out.view_pos = input.view_pos.xyz;"));
        assert!(rendered.contains("let v = normalize(-input.view_pos);"));
    }

    #[test]
    fn writes_shader_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("my_fruit.wgsl");

        preset().write_to(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("vec3<f32>(0.000, 0.000, 1.000)"));
    }

    #[test]
    fn write_to_surfaces_io_errors() {
        let err = preset()
            .write_to(Path::new("/nonexistent-dir/fruit.wgsl"))
            .unwrap_err();

        assert!(matches!(err, ExportError::Io(_)));
    }
}
