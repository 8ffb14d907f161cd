//! Templates compiled into the binary.
//!
//! The files under `templates/` are the single source; `include_str!` keeps
//! these constants in sync at build time.

pub const DOCKERFILE: &str = include_str!("../../templates/Dockerfile.tmpl");
pub const DOCKERIGNORE: &str = include_str!("../../templates/dockerignore.tmpl");
pub const DEPLOYMENT: &str = include_str!("../../templates/deployment.yaml.tmpl");
pub const CONFIGMAP: &str = include_str!("../../templates/configmap.yaml.tmpl");
pub const BUILD_SCRIPT: &str = include_str!("../../templates/build.sh.tmpl");
pub const DEPLOY_SCRIPT: &str = include_str!("../../templates/deploy.sh.tmpl");

/// Look up a built-in template by file name.
pub fn lookup(name: &str) -> Option<&'static str> {
    match name {
        "Dockerfile.tmpl" => Some(DOCKERFILE),
        "dockerignore.tmpl" => Some(DOCKERIGNORE),
        "deployment.yaml.tmpl" => Some(DEPLOYMENT),
        "configmap.yaml.tmpl" => Some(CONFIGMAP),
        "build.sh.tmpl" => Some(BUILD_SCRIPT),
        "deploy.sh.tmpl" => Some(DEPLOY_SCRIPT),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::lookup;
    use crate::render::OUTPUT_FILES;

    #[test]
    fn every_output_has_a_builtin_template() {
        for file in &OUTPUT_FILES {
            let source = lookup(file.template).expect("built-in template");
            assert!(!source.trim().is_empty(), "{} is empty", file.template);
        }
        assert!(lookup("missing.tmpl").is_none());
    }
}
