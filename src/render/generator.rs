//! Deployment file generation from the shipped templates

use crate::error::TemplateError;
use crate::render::context::package_name_for;
use crate::render::{embedded, render_template, RenderContext, Strictness};
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A template and the file it produces, relative to the output directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputFile {
    pub template: &'static str,
    pub path: &'static str,
    pub executable: bool,
}

/// Generated files, in the order they are written.
pub const OUTPUT_FILES: [OutputFile; 6] = [
    OutputFile { template: "Dockerfile.tmpl", path: "Dockerfile", executable: false },
    OutputFile { template: "dockerignore.tmpl", path: ".dockerignore", executable: false },
    OutputFile {
        template: "deployment.yaml.tmpl",
        path: "k8s/deployment.yaml",
        executable: false,
    },
    OutputFile { template: "configmap.yaml.tmpl", path: "k8s/configmap.yaml", executable: false },
    OutputFile { template: "build.sh.tmpl", path: "build.sh", executable: true },
    OutputFile { template: "deploy.sh.tmpl", path: "deploy.sh", executable: true },
];

#[cfg(unix)]
const EXECUTABLE_MODE: u32 = 0o755;

/// Where template sources are read from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TemplateSource {
    /// The templates compiled into the binary.
    #[default]
    Embedded,
    /// `<name>` files inside a directory, for customised templates.
    Directory(PathBuf),
}

/// Renders the template set into an output directory.
#[derive(Debug, Clone)]
pub struct TemplateGenerator {
    source: TemplateSource,
    strictness: Strictness,
}

impl TemplateGenerator {
    /// Generator reading templates from `template_dir`.
    pub fn new(template_dir: impl Into<PathBuf>) -> Self {
        Self::with_source(TemplateSource::Directory(template_dir.into()))
    }

    /// Generator using the built-in templates.
    pub fn embedded() -> Self {
        Self::with_source(TemplateSource::Embedded)
    }

    pub fn with_source(source: TemplateSource) -> Self {
        Self { source, strictness: Strictness::default() }
    }

    /// Set how undefined variables are handled.
    pub fn strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    pub fn source(&self) -> &TemplateSource {
        &self.source
    }

    /// Render a single template by file name.
    pub fn render(&self, name: &str, context: &RenderContext) -> Result<String, TemplateError> {
        let source = self.load(name)?;
        render_template(name, &source, context, self.strictness)
    }

    fn load(&self, name: &str) -> Result<Cow<'static, str>, TemplateError> {
        match &self.source {
            TemplateSource::Embedded => {
                embedded::lookup(name).map(Cow::Borrowed).ok_or_else(|| TemplateError::NotFound {
                    name: name.to_string(),
                    location: "built-in templates".to_string(),
                })
            }
            TemplateSource::Directory(dir) => match fs::read_to_string(dir.join(name)) {
                Ok(source) => Ok(Cow::Owned(source)),
                Err(err) if err.kind() == io::ErrorKind::NotFound => {
                    Err(TemplateError::NotFound {
                        name: name.to_string(),
                        location: dir.display().to_string(),
                    })
                }
                Err(source) => Err(TemplateError::Read { name: name.to_string(), source }),
            },
        }
    }

    /// Render every file in [`OUTPUT_FILES`] into `output_dir`.
    ///
    /// `package_name` is derived from `project_name` when the context lacks
    /// it. Existing files are overwritten. The first failure stops
    /// generation; files written before it are left in place. Returns the
    /// paths written, in order.
    pub fn generate_all(
        &self,
        context: &RenderContext,
        output_dir: &Path,
    ) -> Result<Vec<PathBuf>, TemplateError> {
        let mut context = context.clone();
        if !context.contains_key("package_name") {
            if let Some(project_name) = context.get("project_name") {
                let package_name = package_name_for(project_name);
                context.insert("package_name".to_string(), package_name);
            }
        }

        let mut written = Vec::with_capacity(OUTPUT_FILES.len());
        for file in &OUTPUT_FILES {
            let output_path = output_dir.join(file.path);
            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent).map_err(|source| TemplateError::FileWrite {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }

            let content = self.render(file.template, &context)?;
            fs::write(&output_path, content).map_err(|source| TemplateError::FileWrite {
                path: output_path.clone(),
                source,
            })?;
            tracing::debug!("Wrote {}", output_path.display());
            written.push(output_path);
        }

        for file in OUTPUT_FILES.iter().filter(|file| file.executable) {
            mark_executable(&output_dir.join(file.path))?;
        }

        tracing::info!("Generated {} files in {}", written.len(), output_dir.display());
        Ok(written)
    }
}

#[cfg(unix)]
fn mark_executable(path: &Path) -> Result<(), TemplateError> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(EXECUTABLE_MODE))
        .map_err(|source| TemplateError::FileWrite { path: path.to_path_buf(), source })
}

#[cfg(not(unix))]
fn mark_executable(_path: &Path) -> Result<(), TemplateError> {
    Ok(())
}
