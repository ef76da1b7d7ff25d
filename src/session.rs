//! An IGV session: which tracks to load and how to lay them out.

pub mod builder;

pub use builder::Builder;

use std::io;
use std::io::Write;

use crate::document;
use crate::document::Element;
use crate::genome::Profile;
use crate::track::Track;

/// The session format version emitted.
const SESSION_VERSION: &str = "8";

/// The default locus.
const SESSION_LOCUS: &str = "All";

/// The data panel height.
const DATA_PANEL_HEIGHT: &str = "534";

/// The feature panel height.
const FEATURE_PANEL_HEIGHT: &str = "302";

/// The width of both panels.
const PANEL_WIDTH: &str = "1778";

/// The divider fraction between the data and feature panels.
const DIVIDER_FRACTIONS: &str = "0.6358244365361803";

/// The font size applied to every track.
const FONT_SIZE: &str = "10";

/// The annotation track color.
const GENE_TRACK_COLOR: &str = "0,0,178";

/// The annotation track height.
const GENE_TRACK_HEIGHT: &str = "35";

/// Attribute names hidden in IGV's attribute panel.
const HIDDEN_ATTRIBUTES: [&str; 3] = ["DATA FILE", "DATA TYPE", "NAME"];

/// An IGV session.
///
/// A session pairs a genome (the identifier as provided, plus the
/// gene-track [`Profile`] resolved from it) with zero or more data
/// [`Track`]s in input order. Sessions cannot be instantiated directly;
/// use [`Builder`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Session {
    /// The genome identifier, exactly as provided.
    genome: String,

    /// The gene-track profile resolved from the genome identifier.
    profile: Profile,

    /// The data tracks, in input order.
    tracks: Vec<Track>,
}

impl Session {
    /// Returns the genome identifier for the session.
    ///
    /// # Examples
    ///
    /// ```
    /// use sessionfile::session::Builder;
    ///
    /// let session = Builder::default().genome("mm10")?.try_build()?;
    /// assert_eq!(session.genome(), "mm10");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn genome(&self) -> &str {
        &self.genome
    }

    /// Returns the data tracks for the session, in input order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Assembles the session document tree.
    ///
    /// Deterministic: identical sessions produce structurally identical
    /// trees. The layout constants and per-element attribute sets are fixed
    /// for compatibility with IGV's own exports; only the genome, the
    /// gene-track profile, and the data tracks vary.
    pub fn to_element(&self) -> Element {
        let mut resources = Element::new("Resources");
        let mut data_panel = Element::new("Panel")
            .attribute("height", DATA_PANEL_HEIGHT)
            .attribute("name", "DataPanel")
            .attribute("width", PANEL_WIDTH);

        for track in &self.tracks {
            resources.push_child(Element::new("Resource").attribute("path", track.url()));
            data_panel.push_child(data_track(track));
        }

        // The feature panel always holds exactly two tracks: the reference
        // sequence, then the genome's annotation track.
        let feature_panel = Element::new("Panel")
            .attribute("height", FEATURE_PANEL_HEIGHT)
            .attribute("name", "FeaturePanel")
            .attribute("width", PANEL_WIDTH)
            .child(sequence_track())
            .child(gene_track(&self.profile));

        let mut hidden = Element::new("HiddenAttributes");
        for name in HIDDEN_ATTRIBUTES {
            hidden.push_child(Element::new("Attribute").attribute("name", name));
        }

        Element::new("Session")
            .attribute("genome", self.genome.as_str())
            .attribute("hasGeneTrack", "true")
            .attribute("hasSequenceTrack", "true")
            .attribute("locus", SESSION_LOCUS)
            .attribute("version", SESSION_VERSION)
            .child(resources)
            .child(data_panel)
            .child(feature_panel)
            .child(Element::new("PanelLayout").attribute("dividerFractions", DIVIDER_FRACTIONS))
            .child(hidden)
    }

    /// Pretty-prints and serializes the session to `inner` as a UTF-8 XML
    /// document.
    ///
    /// # Examples
    ///
    /// ```
    /// use sessionfile::session::Builder;
    /// use sessionfile::Track;
    ///
    /// let session = Builder::default()
    ///     .genome("hg38")?
    ///     .push_track(Track::from_url("https://example.com/a.bw"))
    ///     .try_build()?;
    ///
    /// let mut output = Vec::new();
    /// session.write_to(&mut output)?;
    ///
    /// assert!(String::from_utf8(output)?.starts_with("<?xml"));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn write_to<W>(&self, inner: W) -> io::Result<()>
    where
        W: Write,
    {
        let mut root = self.to_element();
        document::indent(&mut root);
        document::writer::write_document(&root, inner)
    }
}

/// The reference sequence track shown at the top of the feature panel.
fn sequence_track() -> Element {
    Element::new("Track")
        .attribute("clazz", "org.broad.igv.track.SequenceTrack")
        .attribute("fontSize", FONT_SIZE)
        .attribute("id", "Reference sequence")
        .attribute("name", "Reference sequence")
        .attribute("visible", "true")
}

/// The gene annotation track parameterized by the genome profile.
fn gene_track(profile: &Profile) -> Element {
    Element::new("Track")
        .attribute("clazz", "org.broad.igv.track.FeatureTrack")
        .attribute("color", GENE_TRACK_COLOR)
        .attribute(
            "colorScale",
            format!(
                "ContinuousColorScale;0.0;{};255,255,255;0,0,178",
                profile.color_scale_maximum()
            ),
        )
        .attribute("fontSize", FONT_SIZE)
        .attribute("height", GENE_TRACK_HEIGHT)
        .attribute("id", profile.gene_track_id())
        .attribute("name", profile.gene_track_name())
        .attribute("visible", "true")
}

/// A data panel row backed by one hosted file.
fn data_track(track: &Track) -> Element {
    Element::new("Track")
        .attribute("autoScale", "false")
        .attribute("clazz", "org.broad.igv.track.DataSourceTrack")
        .attribute("fontSize", FONT_SIZE)
        .attribute("id", track.url())
        .attribute("name", track.name())
        .attribute("renderer", "BAR_CHART")
        .attribute("visible", "true")
        .attribute("windowFunction", "mean")
        .child(data_range())
}

/// The fixed display range attached to every data track.
fn data_range() -> Element {
    Element::new("DataRange")
        .attribute("baseline", "0.0")
        .attribute("drawBaseline", "true")
        .attribute("flipAxis", "false")
        .attribute("maximum", "1.0")
        .attribute("minimum", "0.0")
        .attribute("type", "LINEAR")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::Reader;

    fn session_for(data: &[u8], genome: &str) -> Session {
        let mut reader = Reader::new(data);
        let mut builder = Builder::default().genome(genome).unwrap();

        for result in reader.tracks() {
            builder = builder.push_track(result.unwrap());
        }

        builder.try_build().unwrap()
    }

    fn serialize(session: &Session) -> String {
        let mut output = Vec::new();
        session.write_to(&mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_full_document_layout() {
        let session = session_for(b"https://www.dropbox.com/s/abc/H3K27ac.bw?dl=0", "hg38");

        let expected = "\
<?xml version=\"1.0\" encoding=\"UTF-8\"?>
<Session genome=\"hg38\" hasGeneTrack=\"true\" hasSequenceTrack=\"true\" locus=\"All\" version=\"8\">
    <Resources>
        <Resource path=\"https://www.dropbox.com/s/abc/H3K27ac.bw?dl=1\"/>
    </Resources>
    <Panel height=\"534\" name=\"DataPanel\" width=\"1778\">
        <Track autoScale=\"false\" clazz=\"org.broad.igv.track.DataSourceTrack\" fontSize=\"10\" id=\"https://www.dropbox.com/s/abc/H3K27ac.bw?dl=1\" name=\"H3K27ac.bw\" renderer=\"BAR_CHART\" visible=\"true\" windowFunction=\"mean\">
            <DataRange baseline=\"0.0\" drawBaseline=\"true\" flipAxis=\"false\" maximum=\"1.0\" minimum=\"0.0\" type=\"LINEAR\"/>
        </Track>
    </Panel>
    <Panel height=\"302\" name=\"FeaturePanel\" width=\"1778\">
        <Track clazz=\"org.broad.igv.track.SequenceTrack\" fontSize=\"10\" id=\"Reference sequence\" name=\"Reference sequence\" visible=\"true\"/>
        <Track clazz=\"org.broad.igv.track.FeatureTrack\" color=\"0,0,178\" colorScale=\"ContinuousColorScale;0.0;845.0;255,255,255;0,0,178\" fontSize=\"10\" height=\"35\" id=\"hg38_genes\" name=\"Gene\" visible=\"true\"/>
    </Panel>
    <PanelLayout dividerFractions=\"0.6358244365361803\"/>
    <HiddenAttributes>
        <Attribute name=\"DATA FILE\"/>
        <Attribute name=\"DATA TYPE\"/>
        <Attribute name=\"NAME\"/>
    </HiddenAttributes>
</Session>
";

        assert_eq!(serialize(&session), expected);
    }

    #[test]
    fn test_two_line_input_builds_two_tracks() {
        let session = session_for(
            b"a.bw\thttps://example.com/a.bw\nhttps://www.dropbox.com/s/abc/b.bw?dl=0",
            "hg38",
        );
        let root = session.to_element();

        let resources = &root.children()[0];
        assert_eq!(resources.children().len(), 2);
        assert!(resources.children()[1].attributes()[0].1.ends_with("dl=1"));

        let data_panel = &root.children()[1];
        let names = data_panel
            .children()
            .iter()
            .map(|track| track.attributes()[4].1.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, ["a.bw", "b.bw"]);
    }

    #[test]
    fn test_feature_panel_always_has_two_tracks() {
        let session = session_for(b"", "mm10");
        let root = session.to_element();

        let feature_panel = &root.children()[2];
        assert_eq!(feature_panel.children().len(), 2);

        // Sequence track first, then the genome's annotation track.
        assert_eq!(
            feature_panel.children()[0].attributes()[0].1,
            "org.broad.igv.track.SequenceTrack"
        );
        let gene = &feature_panel.children()[1];
        assert!(gene
            .attributes()
            .contains(&(String::from("id"), String::from("mm10_genes"))));
        assert!(gene
            .attributes()
            .contains(&(String::from("name"), String::from("Refseq genes"))));
    }

    #[test]
    fn test_zero_track_session_keeps_the_fixed_skeleton() {
        let session = session_for(b"", "hg38");
        let root = session.to_element();

        assert_eq!(root.children().len(), 5);
        assert!(root.children()[0].children().is_empty());
        assert!(root.children()[1].children().is_empty());
    }

    #[test]
    fn test_genome_identifier_is_emitted_verbatim() {
        let session = session_for(b"", "HG38");
        let root = session.to_element();

        // Root attribute keeps the caller's casing; the gene track resolves
        // to the canonical id.
        assert_eq!(root.attributes()[0].1, "HG38");
        let gene = &root.children()[2].children()[1];
        assert!(gene
            .attributes()
            .contains(&(String::from("id"), String::from("hg38_genes"))));
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let data = b"a.bw\thttps://example.com/a.bw\nhttps://www.dropbox.com/s/abc/b.bw?dl=0";

        let first = serialize(&session_for(data, "hg38"));
        let second = serialize(&session_for(data, "hg38"));

        assert_eq!(first, second);
    }
}
