//! Genome assemblies and their gene-track metadata.

/// The gene annotation metadata attached to a genome assembly.
///
/// A profile parameterizes the annotation track in the session's feature
/// panel: the IGV identifier of the gene track, its display name, and the
/// upper bound of its continuous color scale.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Profile {
    /// The IGV identifier of the gene track.
    gene_track_id: String,

    /// The display name of the gene track.
    gene_track_name: &'static str,

    /// The upper bound of the gene track's continuous color scale.
    color_scale_maximum: &'static str,
}

impl Profile {
    /// Returns the IGV identifier of the gene track.
    pub fn gene_track_id(&self) -> &str {
        &self.gene_track_id
    }

    /// Returns the display name of the gene track.
    pub fn gene_track_name(&self) -> &str {
        self.gene_track_name
    }

    /// Returns the upper bound of the gene track's continuous color scale.
    pub fn color_scale_maximum(&self) -> &str {
        self.color_scale_maximum
    }
}

/// A reference genome assembly.
///
/// Assemblies with dedicated gene-track metadata are first-class variants;
/// everything else falls into [`Assembly::Other`], which carries the
/// identifier exactly as provided.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Assembly {
    /// The GRCh38 human assembly (`hg38`).
    Hg38,

    /// The GRCm38 mouse assembly (`mm10`).
    Mm10,

    /// Any other assembly, identified verbatim.
    Other(String),
}

impl Assembly {
    /// Resolves an assembly from an identifier.
    ///
    /// Matching against the known assemblies is case-insensitive; an
    /// unrecognized identifier is preserved verbatim. Total: every
    /// identifier resolves to an assembly.
    ///
    /// # Examples
    ///
    /// ```
    /// use sessionfile::genome::Assembly;
    ///
    /// assert_eq!(Assembly::new("hg38"), Assembly::Hg38);
    /// assert_eq!(Assembly::new("HG38"), Assembly::Hg38);
    /// assert_eq!(Assembly::new("mm10"), Assembly::Mm10);
    /// assert_eq!(
    ///     Assembly::new("xyz123"),
    ///     Assembly::Other(String::from("xyz123"))
    /// );
    /// ```
    pub fn new(identifier: &str) -> Self {
        match identifier.to_ascii_lowercase().as_str() {
            "hg38" => Self::Hg38,
            "mm10" => Self::Mm10,
            _ => Self::Other(identifier.to_string()),
        }
    }

    /// Returns the gene-track profile for the assembly.
    ///
    /// Unrecognized assemblies synthesize a gene-track id from their
    /// identifier and fall back to the `hg38` color-scale bound.
    ///
    /// # Examples
    ///
    /// ```
    /// use sessionfile::genome::Assembly;
    ///
    /// let profile = Assembly::new("hg38").profile();
    /// assert_eq!(profile.gene_track_id(), "hg38_genes");
    /// assert_eq!(profile.gene_track_name(), "Gene");
    /// assert_eq!(profile.color_scale_maximum(), "845.0");
    ///
    /// let profile = Assembly::new("mm10").profile();
    /// assert_eq!(profile.gene_track_id(), "mm10_genes");
    /// assert_eq!(profile.gene_track_name(), "Refseq genes");
    /// assert_eq!(profile.color_scale_maximum(), "406.0");
    ///
    /// let profile = Assembly::new("xyz123").profile();
    /// assert_eq!(profile.gene_track_id(), "xyz123_genes");
    /// assert_eq!(profile.gene_track_name(), "Gene");
    /// assert_eq!(profile.color_scale_maximum(), "845.0");
    /// ```
    pub fn profile(&self) -> Profile {
        match self {
            Self::Hg38 => Profile {
                gene_track_id: String::from("hg38_genes"),
                gene_track_name: "Gene",
                color_scale_maximum: "845.0",
            },
            Self::Mm10 => Profile {
                gene_track_id: String::from("mm10_genes"),
                gene_track_name: "Refseq genes",
                color_scale_maximum: "406.0",
            },
            Self::Other(identifier) => Profile {
                gene_track_id: format!("{identifier}_genes"),
                gene_track_name: "Gene",
                color_scale_maximum: "845.0",
            },
        }
    }
}

impl From<&str> for Assembly {
    fn from(identifier: &str) -> Self {
        Self::new(identifier)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn test_known_assemblies_resolve_case_insensitively() {
        assert_eq!(Assembly::new("hg38"), Assembly::Hg38);
        assert_eq!(Assembly::new("Hg38"), Assembly::Hg38);
        assert_eq!(Assembly::new("MM10"), Assembly::Mm10);
    }

    #[test]
    fn test_uppercase_identifier_resolves_to_the_canonical_profile() {
        let profile = Assembly::new("HG38").profile();

        assert_eq!(profile.gene_track_id(), "hg38_genes");
        assert_eq!(profile.gene_track_name(), "Gene");
        assert_eq!(profile.color_scale_maximum(), "845.0");
    }

    #[test]
    fn test_unrecognized_identifier_is_preserved_verbatim() {
        // The synthesized id uses the identifier as given, not lowercased.
        let profile = Assembly::new("GRCz11").profile();

        assert_eq!(profile.gene_track_id(), "GRCz11_genes");
        assert_eq!(profile.gene_track_name(), "Gene");
        assert_eq!(profile.color_scale_maximum(), "845.0");
    }
}
