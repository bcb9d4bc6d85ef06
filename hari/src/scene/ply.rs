use super::Result;
use crate::{
    hari_error, hari_info,
    math::{
        transforms::{scale, translation},
        Point3, Transform, Vec3,
    },
    mesh::Mesh,
};

use itertools::Itertools;
use ply_rs;
use std::{collections::HashSet, path::Path, sync::Arc, time::Instant};

pub struct PlyResult {
    pub mesh: Arc<Mesh>,
    pub fit: Transform<f32>,
}

/// Loads the mesh in a PLY file.
///
/// The mesh stays in its own object space. `fit` scales and translates it to
/// fit inside (-1,-1,-1),(1,1,1) around the origin.
pub fn load(path: &Path) -> Result<PlyResult> {
    let file = match std::fs::File::open(path) {
        Ok(f) => f,
        Err(e) => {
            hari_error!("Could not open '{}'", path.to_string_lossy());
            return Err(e.into());
        }
    };
    let mut file_buf = std::io::BufReader::new(file);

    let header =
        ply_rs::parser::Parser::<ply_rs::ply::DefaultElement>::new().read_header(&mut file_buf)?;

    if !is_valid(&header) {
        return Err("PLY: Unsupported content".into());
    }

    let vertices_start = Instant::now();
    let vertex_parser = ply_rs::parser::Parser::<Vertex>::new();
    let vertices = vertex_parser.read_payload_for_element(
        &mut file_buf,
        &header.elements["vertex"],
        &header,
    )?;
    hari_info!(
        "PLY: Parsed {} vertices in {:.2}s",
        vertices.len(),
        (vertices_start.elapsed().as_micros() as f32) * 1e-6
    );

    let faces_start = Instant::now();
    let face_parser = ply_rs::parser::Parser::<Face>::new();
    let faces =
        face_parser.read_payload_for_element(&mut file_buf, &header.elements["face"], &header)?;
    hari_info!(
        "PLY: Parsed {} faces in {:.2}s",
        faces.len(),
        (faces_start.elapsed().as_micros() as f32) * 1e-6
    );

    let points: Vec<Point3<f32>> = vertices
        .iter()
        .map(|&Vertex { x, y, z }| Point3::new(x, y, z))
        .collect();

    let indices_start = Instant::now();
    let mut indices = Vec::new();
    for f in &faces {
        // Fan triangulation handles the quads and convex n-gons that are
        // common in the wild
        for (&v1, &v2) in f.indices.iter().skip(1).tuple_windows() {
            indices.push(f.indices[0]);
            indices.push(v1);
            indices.push(v2);
        }
    }
    hari_info!(
        "PLY: Converted faces to an index buffer in {:.2}s",
        (indices_start.elapsed().as_micros() as f32) * 1e-6
    );

    let mesh = match Mesh::new(indices, points) {
        Ok(m) => Arc::new(m),
        Err(why) => {
            return Err(format!("PLY: Invalid mesh: {:?}", why).into());
        }
    };

    let bb = mesh.bounds();
    let mesh_center = bb.p_min + bb.diagonal() / 2.0;
    let mesh_extent = bb.diagonal().max_comp();
    // NaN also fails the comparison so degenerate input gets caught here
    if !(mesh_extent > 0.0) {
        return Err("PLY: Mesh has no extent".into());
    }
    let mesh_scale = 1.0 / mesh_extent;
    let fit = &scale(mesh_scale, mesh_scale, mesh_scale) * &translation(-Vec3::from(mesh_center));

    Ok(PlyResult { mesh, fit })
}

struct PlyContent {
    vertex: Option<HashSet<String>>,
    face: Option<HashSet<String>>,
}

impl PlyContent {
    fn new() -> Self {
        Self {
            vertex: None,
            face: None,
        }
    }
}

fn is_valid(header: &ply_rs::ply::Header) -> bool {
    let mut content = PlyContent::new();
    for (name, element) in &header.elements {
        match name.as_str() {
            "vertex" => {
                let mut props = HashSet::new();
                for (name, _) in &element.properties {
                    props.insert(name.clone());
                }
                content.vertex = Some(props);
            }
            "face" => {
                let mut props = HashSet::new();
                for (name, _) in &element.properties {
                    props.insert(name.clone());
                }
                content.face = Some(props);
            }
            _ => hari_info!("PLY: Unknown element '{}'", name),
        }
    }

    let mut valid = true;

    if let Some(props) = content.vertex {
        let expected_vert_props = vec!["x", "y", "z"];
        for p in &expected_vert_props {
            if !props.contains(&p.to_string()) {
                hari_error!("PLY: Element 'vertex' missing property '{}'", p);
                valid = false;
            }
        }
        for p in props.difference(&expected_vert_props.iter().map(|p| p.to_string()).collect()) {
            hari_info!("PLY: Unknown 'vertex' property '{}'", p);
        }
    } else {
        hari_error!("PLY: Missing element 'vertex'");
        valid = false;
    }

    if let Some(props) = content.face {
        // For some reason (Paul Bourke's example?), PLYs come with one of two different names
        // for face indices
        if !props.contains(&String::from("vertex_index"))
            && !props.contains(&String::from("vertex_indices"))
        {
            hari_error!("PLY: Element 'face' should have either 'vertex_index' or 'vertex_indices'");
            valid = false;
        }
        for p in props {
            match p.as_str() {
                "vertex_index" | "vertex_indices" => (),
                _ => hari_info!("PLY: Unknown 'face' property '{}'", p),
            }
        }
    } else {
        hari_error!("PLY: Missing element 'face'");
        valid = false;
    }

    valid
}

struct Vertex {
    x: f32,
    y: f32,
    z: f32,
}

impl ply_rs::ply::PropertyAccess for Vertex {
    fn new() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    fn set_property(&mut self, key: String, property: ply_rs::ply::Property) {
        match property {
            ply_rs::ply::Property::Float(v) => match key.as_str() {
                "x" => self.x = v,
                "y" => self.y = v,
                "z" => self.z = v,
                _ => (),
            },
            ply_rs::ply::Property::Double(v) => match key.as_str() {
                "x" => self.x = v as f32,
                "y" => self.y = v as f32,
                "z" => self.z = v as f32,
                _ => (),
            },
            _ => (),
        }
    }
}

struct Face {
    indices: Vec<usize>,
}

impl ply_rs::ply::PropertyAccess for Face {
    fn new() -> Self {
        Self {
            indices: Vec::new(),
        }
    }

    fn set_property(&mut self, key: String, property: ply_rs::ply::Property) {
        match property {
            ply_rs::ply::Property::ListInt(v) => match key.as_str() {
                "vertex_index" | "vertex_indices" => {
                    self.indices = v.iter().map(|&i| i as usize).collect();
                }
                _ => (),
            },
            ply_rs::ply::Property::ListUInt(v) => match key.as_str() {
                "vertex_index" | "vertex_indices" => {
                    self.indices = v.iter().map(|&i| i as usize).collect();
                }
                _ => (),
            },
            _ => (),
        }
    }
}
