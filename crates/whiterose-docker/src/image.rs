//! Image references and build options.

use std::fmt;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::DockerError;

/// A `name:tag` image reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    name: String,
    tag: String,
}

impl ImageRef {
    /// Creates a reference from its parts.
    pub fn new(name: impl Into<String>, tag: impl Into<String>) -> Result<Self, DockerError> {
        let name = name.into();
        let tag = tag.into();
        let reference = format!("{}:{}", name, tag);

        if name.is_empty() || name.contains(char::is_whitespace) {
            return Err(DockerError::invalid_image(reference, "invalid name"));
        }
        if tag.is_empty() || tag.contains(char::is_whitespace) {
            return Err(DockerError::invalid_image(reference, "invalid tag"));
        }
        Ok(Self { name, tag })
    }

    /// Parses `name[:tag]`; the tag defaults to `latest`.
    ///
    /// A colon inside the registry part (`host:5000/app`) is not a tag separator.
    pub fn parse(reference: &str) -> Result<Self, DockerError> {
        let last_segment = reference.rfind('/').map_or(0, |i| i + 1);
        match reference[last_segment..].rfind(':') {
            Some(i) => {
                let split = last_segment + i;
                Self::new(&reference[..split], &reference[split + 1..])
            },
            None => Self::new(reference, "latest"),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.tag)
    }
}

/// Everything `docker build` needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    image: ImageRef,
    dockerfile: PathBuf,
    context: PathBuf,
    build_args: IndexMap<String, String>,
    target: Option<String>,
    no_cache: bool,
}

impl BuildOptions {
    /// Creates options building `dockerfile` with `context` as build context.
    pub fn new(image: ImageRef, dockerfile: impl Into<PathBuf>, context: impl Into<PathBuf>) -> Self {
        Self {
            image,
            dockerfile: dockerfile.into(),
            context: context.into(),
            build_args: IndexMap::new(),
            target: None,
            no_cache: true,
        }
    }

    /// Adds a `--build-arg`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidBuildArg` if the key is empty or only punctuation.
    pub fn with_build_arg(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, DockerError> {
        let key = key.into();
        if !key.chars().any(|c| c.is_alphanumeric()) {
            return Err(DockerError::InvalidBuildArg(key));
        }
        self.build_args.insert(key, value.into());
        Ok(self)
    }

    /// Sets the multi-stage build target.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into()).filter(|t: &String| !t.is_empty());
        self
    }

    /// Enables or disables the build cache.
    pub fn with_cache(mut self, enabled: bool) -> Self {
        self.no_cache = !enabled;
        self
    }

    pub fn image(&self) -> &ImageRef {
        &self.image
    }

    pub fn dockerfile(&self) -> &Path {
        &self.dockerfile
    }

    /// Returns the `docker` arguments, starting with `build`.
    pub fn args(&self) -> Vec<String> {
        let mut args = vec!["build".to_string()];

        for (key, value) in &self.build_args {
            args.push("--build-arg".to_string());
            args.push(format!("{}={}", key, value));
        }

        args.push("--progress=plain".to_string());
        if self.no_cache {
            args.push("--no-cache".to_string());
        }
        if let Some(target) = &self.target {
            args.push("--target".to_string());
            args.push(target.clone());
        }

        args.push("-t".to_string());
        args.push(self.image.to_string());
        args.push("-f".to_string());
        args.push(self.dockerfile.to_string_lossy().into_owned());
        args.push(self.context.to_string_lossy().into_owned());
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_image_ref() {
        let image = ImageRef::parse("my_app:latest").unwrap();
        assert_eq!(image.name(), "my_app");
        assert_eq!(image.tag(), "latest");

        let image = ImageRef::parse("registry:5000/team/api").unwrap();
        assert_eq!(image.name(), "registry:5000/team/api");
        assert_eq!(image.tag(), "latest");

        let image = ImageRef::parse("registry:5000/team/api:1.2").unwrap();
        assert_eq!(image.to_string(), "registry:5000/team/api:1.2");
    }

    #[test]
    fn test_invalid_image_ref() {
        assert!(ImageRef::parse("").is_err());
        assert!(ImageRef::parse("my app:latest").is_err());
        assert!(ImageRef::parse("my_app:").is_err());
    }

    #[test]
    fn test_build_arg_key_validation() {
        let options = BuildOptions::new(ImageRef::parse("a").unwrap(), "Dockerfile", ".");
        assert!(options.clone().with_build_arg("", "x").is_err());
        assert!(options.clone().with_build_arg("--", "x").is_err());
        assert!(options.with_build_arg("IMAGE_VERSION", "1.0").is_ok());
    }

    #[test]
    fn test_build_args_order() {
        let options = BuildOptions::new(
            ImageRef::parse("my_app:latest").unwrap(),
            "/work/Dockerfile",
            "/work",
        )
        .with_build_arg("IMAGE_VERSION", "latest")
        .unwrap()
        .with_target("development");

        assert_eq!(
            options.args(),
            vec![
                "build",
                "--build-arg",
                "IMAGE_VERSION=latest",
                "--progress=plain",
                "--no-cache",
                "--target",
                "development",
                "-t",
                "my_app:latest",
                "-f",
                "/work/Dockerfile",
                "/work",
            ]
        );
    }

    #[test]
    fn test_cache_and_empty_target() {
        let options = BuildOptions::new(ImageRef::parse("a:1").unwrap(), "Dockerfile", ".")
            .with_cache(true)
            .with_target("");

        let args = options.args();
        assert!(!args.contains(&"--no-cache".to_string()));
        assert!(!args.contains(&"--target".to_string()));
    }
}
