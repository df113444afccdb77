//! Helpers shared by the SU2 integration tests.
#![allow(dead_code)]

use std::io::{self, Write};
use std::ops::ControlFlow;

use mesh_su2::prelude::*;

/// SU2 text split back into its records.
#[derive(Debug, Default)]
pub struct ParsedSu2 {
    pub ndime: usize,
    pub nelem: usize,
    pub elements: Vec<Vec<usize>>,
    pub npoin: usize,
    pub nodes: Vec<String>,
    pub nmark: usize,
    pub markers: Vec<ParsedMarker>,
}

#[derive(Debug, Default)]
pub struct ParsedMarker {
    pub tag: String,
    pub declared: usize,
    pub elements: Vec<Vec<usize>>,
}

#[derive(Clone, Copy)]
enum Body {
    None,
    Elements,
    Nodes,
    Marker,
}

fn ints(line: &str) -> Vec<usize> {
    line.split_whitespace()
        .map(|f| f.parse().expect("integer field"))
        .collect()
}

pub fn parse_su2(text: &str) -> ParsedSu2 {
    let mut parsed = ParsedSu2::default();
    let mut body = Body::None;
    for line in text.lines() {
        if line.starts_with('%') {
            continue;
        }
        if let Some((key, value)) = line.split_once("= ") {
            match key {
                "NDIME" => parsed.ndime = value.parse().expect("NDIME"),
                "NELEM" => {
                    parsed.nelem = value.parse().expect("NELEM");
                    body = Body::Elements;
                }
                "NPOIN" => {
                    parsed.npoin = value.parse().expect("NPOIN");
                    body = Body::Nodes;
                }
                "NMARK" => {
                    parsed.nmark = value.parse().expect("NMARK");
                    body = Body::None;
                }
                "MARKER_TAG" => parsed.markers.push(ParsedMarker {
                    tag: value.to_string(),
                    ..Default::default()
                }),
                "MARKER_ELEMS" => {
                    let marker = parsed.markers.last_mut().expect("MARKER_TAG first");
                    marker.declared = value.parse().expect("MARKER_ELEMS");
                    body = Body::Marker;
                }
                other => panic!("unexpected key {other}"),
            }
            continue;
        }
        match body {
            Body::Elements => parsed.elements.push(ints(line)),
            Body::Nodes => parsed.nodes.push(line.to_string()),
            Body::Marker => parsed
                .markers
                .last_mut()
                .expect("marker")
                .elements
                .push(ints(line)),
            Body::None => panic!("body line outside a section: {line:?}"),
        }
    }
    parsed
}

/// A 3D mesh whose blocks hold `block_sizes[i]` tetrahedra and whose domains
/// hold `domain_sizes[j]` triangles.
pub fn tet_mesh(block_sizes: &[usize], domain_sizes: &[usize]) -> InMemoryMesh {
    let mut mesh = InMemoryMesh::new(Dimension::Three);
    for xyz in [
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
    ] {
        mesh.add_vertex(xyz);
    }
    for (b, &n) in block_sizes.iter().enumerate() {
        let elements = (0..n).map(|_| Element::new(CellType::Tetrahedron, [0, 1, 2, 3]));
        mesh.add_block(format!("block{b}"), elements);
    }
    for (d, &n) in domain_sizes.iter().enumerate() {
        let elements = (0..n).map(|_| Element::new(CellType::Triangle, [0, 1, 2]));
        mesh.add_domain(format!("dom{d}"), Condition::named(format!("bc{d}")), elements);
    }
    mesh
}

pub fn export(mesh: &InMemoryMesh) -> String {
    let mut out = Vec::new();
    Su2Writer::new()
        .write_mesh(&mut out, mesh)
        .expect("export succeeds");
    String::from_utf8(out).expect("utf8")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Init(usize),
    Begin(usize),
    Increment,
    EndStep,
    End(bool),
}

/// Progress sink that records every call and can cancel after a number of
/// increments.
#[derive(Debug, Default)]
pub struct Recorder {
    pub events: Vec<Event>,
    pub cancel_after: Option<usize>,
    pub cancel_init: bool,
    pub increments: usize,
}

impl Recorder {
    pub fn cancelling_after(increments: usize) -> Self {
        Self {
            cancel_after: Some(increments),
            ..Self::default()
        }
    }

    pub fn count(&self, event: Event) -> usize {
        self.events.iter().filter(|e| **e == event).count()
    }

    pub fn begins(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::Begin(_)))
            .count()
    }
}

impl Progress for Recorder {
    fn init(&mut self, major_steps: usize) -> ControlFlow<()> {
        self.events.push(Event::Init(major_steps));
        if self.cancel_init {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    fn begin_step(&mut self, units: usize) -> ControlFlow<()> {
        self.events.push(Event::Begin(units));
        ControlFlow::Continue(())
    }

    fn increment(&mut self) -> ControlFlow<()> {
        self.events.push(Event::Increment);
        self.increments += 1;
        match self.cancel_after {
            Some(limit) if self.increments >= limit => ControlFlow::Break(()),
            _ => ControlFlow::Continue(()),
        }
    }

    fn end_step(&mut self) -> ControlFlow<()> {
        self.events.push(Event::EndStep);
        ControlFlow::Continue(())
    }

    fn end(&mut self, success: bool) {
        self.events.push(Event::End(success));
    }
}

/// Sink that accepts `budget` bytes and then fails every write.
pub struct FailingWriter {
    pub budget: usize,
    pub written: Vec<u8>,
}

impl FailingWriter {
    pub fn new(budget: usize) -> Self {
        Self {
            budget,
            written: Vec::new(),
        }
    }
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if buf.len() > self.budget {
            return Err(io::Error::new(io::ErrorKind::StorageFull, "disk full"));
        }
        self.budget -= buf.len();
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
