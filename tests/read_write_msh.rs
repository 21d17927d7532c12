use approx::assert_relative_eq;
use rectmsh::{Connectivity, RectMesh, Rectangle, Resolution};

#[test]
fn written_file_reads_back() {
    let dir = tempfile::tempdir().unwrap();
    let domain = Rectangle::new(0.3, 0.7, 0.1, -0.2);
    let resolution = Resolution::new(6, 5).unwrap();
    let mesh = RectMesh::generate(&domain, &resolution);

    let path = rectmsh::write_to_dir(&mesh, &resolution, dir.path()).unwrap();
    assert_eq!(path.file_name().unwrap(), "rect_6x5.msh");

    let file = rectmsh::read_msh_file(&path).unwrap();

    assert_eq!(file.version, "2.2");
    assert_eq!(file.groups, mesh.groups);
    assert_eq!(file.elements, mesh.elements);

    // shortest round-trip formatting reads back bit for bit
    assert_eq!(file.nodes.as_slice(), mesh.grid.as_slice());
}

#[test]
fn node_count_and_extent() {
    let domain = Rectangle::new(2.0, 1.5, -1.0, 0.5);
    let resolution = Resolution::new(8, 3).unwrap();
    let mesh = RectMesh::generate(&domain, &resolution);

    let text = rectmsh::to_msh_string(&mesh).unwrap();
    let file = rectmsh::read_msh(text.as_bytes()).unwrap();

    assert_eq!(file.nodes.len(), 9 * 4);

    let first = file.nodes.first().unwrap();
    let last = file.nodes.last().unwrap();
    assert_relative_eq!(first.x, -1.0);
    assert_relative_eq!(first.y, 0.5);
    assert_relative_eq!(last.x, 1.0);
    assert_relative_eq!(last.y, 2.0);

    assert!(file.nodes.iter().all(|p| p.z == 0.));
}

#[test]
fn element_references_within_node_range() {
    let mesh = RectMesh::generate(&Rectangle::unit(), &Resolution::new(5, 9).unwrap());
    let text = rectmsh::to_msh_string(&mesh).unwrap();
    let file = rectmsh::read_msh(text.as_bytes()).unwrap();

    let node_count = file.nodes.len();
    let quads = file
        .elements
        .iter()
        .filter(|e| matches!(e.connectivity, Connectivity::Quad(_)))
        .count();

    assert_eq!(quads, 5 * 9);
    assert_eq!(file.elements.len(), 2 * 5 + 2 * 9 + 5 * 9);
    assert!(file
        .elements
        .iter()
        .flat_map(|e| e.nodes().iter())
        .all(|&id| id >= 1 && id <= node_count));
}
