//! Supported distributions and package formats.

use std::fmt;

/// Native package format of a target distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageFormat {
    /// Debian/Ubuntu `.deb`
    Deb,
    /// Fedora `.rpm`
    Rpm,
}

impl PackageFormat {
    /// Tag passed to the builder as `PACKAGE_TYPE`. Also the file extension.
    pub fn as_str(self) -> &'static str {
        match self {
            PackageFormat::Deb => "deb",
            PackageFormat::Rpm => "rpm",
        }
    }

    /// Shell command installing every package of this format found under `/packages`.
    pub fn install_command(self) -> &'static str {
        match self {
            PackageFormat::Deb => {
                "apt-get -q update && \
                 apt-get -q -y --no-install-recommends install gdebi-core && \
                 gdebi -n /packages/*.deb"
            }
            PackageFormat::Rpm => "dnf -y install /packages/*.rpm",
        }
    }
}

impl fmt::Display for PackageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One distribution a package is built and smoke-tested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    /// Output subdirectory name, e.g. `xenial` or `fedora-25`
    pub name: &'static str,
    /// Package format built for this distribution
    pub format: PackageFormat,
    /// fpm-within-docker image producing the package
    pub builder_image: &'static str,
    /// Plain distribution image the package is installed into
    pub tester_image: &'static str,
}

/// Every supported target, in build order.
pub const TARGETS: &[Target] = &[
    Target {
        name: "xenial",
        format: PackageFormat::Deb,
        builder_image: "alanfranz/fpm-within-docker:ubuntu-xenial",
        tester_image: "ubuntu:xenial",
    },
    Target {
        name: "yakkety",
        format: PackageFormat::Deb,
        builder_image: "alanfranz/fpm-within-docker:ubuntu-yakkety",
        tester_image: "ubuntu:yakkety",
    },
    Target {
        name: "zesty",
        format: PackageFormat::Deb,
        builder_image: "alanfranz/fpm-within-docker:ubuntu-zesty",
        tester_image: "ubuntu:zesty",
    },
    Target {
        name: "fedora-25",
        format: PackageFormat::Rpm,
        builder_image: "alanfranz/fpm-within-docker:fedora-25",
        tester_image: "fedora:25",
    },
    Target {
        name: "fedora-26",
        format: PackageFormat::Rpm,
        builder_image: "alanfranz/fpm-within-docker:fedora-26",
        tester_image: "fedora:26",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_order() {
        let names: Vec<_> = TARGETS.iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            ["xenial", "yakkety", "zesty", "fedora-25", "fedora-26"]
        );
    }

    #[test]
    fn test_debian_family_before_fedora() {
        let formats: Vec<_> = TARGETS.iter().map(|t| t.format).collect();
        assert_eq!(
            formats,
            [
                PackageFormat::Deb,
                PackageFormat::Deb,
                PackageFormat::Deb,
                PackageFormat::Rpm,
                PackageFormat::Rpm
            ]
        );
    }

    #[test]
    fn test_format_tag_is_extension() {
        assert_eq!(PackageFormat::Deb.to_string(), "deb");
        assert_eq!(PackageFormat::Rpm.as_str(), "rpm");
    }

    #[test]
    fn test_deb_install_steps_in_order() {
        let cmd = PackageFormat::Deb.install_command();
        let update = cmd.find("apt-get -q update").unwrap();
        let helper = cmd.find("install gdebi-core").unwrap();
        let install = cmd.find("gdebi -n /packages/*.deb").unwrap();
        assert!(update < helper && helper < install);
    }

    #[test]
    fn test_rpm_install_is_single_command() {
        assert_eq!(
            PackageFormat::Rpm.install_command(),
            "dnf -y install /packages/*.rpm"
        );
    }
}
