use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::{Error, Result};
use crate::layer::{LayerEntry, ValidLayer};

/// File name of the layer manifest at the root of an OpenRaster container.
pub const MANIFEST_NAME: &str = "stack.xml";

const STACK: &[u8] = b"stack";
const LAYER: &[u8] = b"layer";

/// Parsed layer manifest.
///
/// Holds every `<layer>` nested under at least one `<stack>`, in document order. Layers outside
/// any stack are not part of the image and are dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Manifest {
    pub root: String,
    pub stack_count: usize,
    pub layers: Vec<LayerEntry>,
}

impl Manifest {
    /// Read and parse a manifest file.
    ///
    /// The file is read as bytes so that an `encoding` other than UTF-8 declared in the XML
    /// prolog is honoured.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let xml = std::fs::read(path).map_err(|e| Error::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse_bytes(&xml)
    }

    pub fn parse(xml: &str) -> Result<Self> {
        Self::read(Reader::from_str(xml))
    }

    /// Parse raw manifest bytes, detecting the encoding from a BOM or the XML declaration.
    pub fn parse_bytes(xml: &[u8]) -> Result<Self> {
        Self::read(Reader::from_reader(xml))
    }

    fn read(mut reader: Reader<&[u8]>) -> Result<Self> {
        let mut manifest = Manifest::default();
        let mut root: Option<String> = None;
        let mut root_closed = false;
        let mut open = 0usize;
        let mut depth = 0usize;

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    let name = element_name(&e);
                    if root_closed {
                        return Err(Error::TrailingElement(name));
                    }
                    root.get_or_insert(name);
                    open += 1;
                    match e.name().as_ref() {
                        STACK => {
                            depth += 1;
                            manifest.stack_count += 1;
                        }
                        LAYER if depth > 0 => {
                            manifest.layers.push(read_layer(&e, depth, &reader)?)
                        }
                        _ => {}
                    }
                }
                Event::Empty(e) => {
                    let name = element_name(&e);
                    if root_closed {
                        return Err(Error::TrailingElement(name));
                    }
                    root.get_or_insert(name);
                    if open == 0 {
                        root_closed = true;
                    }
                    match e.name().as_ref() {
                        STACK => manifest.stack_count += 1,
                        LAYER if depth > 0 => {
                            manifest.layers.push(read_layer(&e, depth, &reader)?)
                        }
                        _ => {}
                    }
                }
                Event::End(e) => {
                    if e.name().as_ref() == STACK {
                        depth = depth.saturating_sub(1);
                    }
                    open = open.saturating_sub(1);
                    if open == 0 {
                        root_closed = true;
                    }
                }
                Event::Text(text) if open == 0 && !text.iter().all(u8::is_ascii_whitespace) => {
                    return Err(Error::StrayText);
                }
                Event::Eof => break,
                _ => {}
            }
        }

        let root = root.ok_or(Error::NoRoot)?;
        if open > 0 {
            return Err(Error::Unclosed(root));
        }
        manifest.root = root;
        tracing::trace!(
            stacks = manifest.stack_count,
            layers = manifest.layers.len(),
            "parsed manifest"
        );
        Ok(manifest)
    }

    /// Layers with both `name` and `src`.
    pub fn valid_layers(&self) -> impl Iterator<Item = ValidLayer<'_>> {
        self.layers.iter().filter_map(LayerEntry::valid)
    }
}

fn element_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.name().as_ref()).into_owned()
}

fn read_layer(e: &BytesStart<'_>, depth: usize, reader: &Reader<&[u8]>) -> Result<LayerEntry> {
    let mut entry = LayerEntry {
        name: None,
        src: None,
        depth,
    };

    for attr in e.attributes() {
        let attr = attr?;
        let slot = match attr.key.as_ref() {
            b"name" => &mut entry.name,
            b"src" => &mut entry.src,
            _ => continue,
        };
        *slot = Some(attr.decode_and_unescape_value(reader.decoder())?.into_owned());
    }

    Ok(entry)
}
