use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use mesh_su2::prelude::*;

/// Structured `n x n x n` hex grid with its six faces as quad markers.
fn hex_grid(n: usize) -> InMemoryMesh {
    let mut mesh = InMemoryMesh::new(Dimension::Three);
    let np = n + 1;
    for k in 0..np {
        for j in 0..np {
            for i in 0..np {
                mesh.add_vertex([i as f64, j as f64, k as f64]);
            }
        }
    }
    let vid = |i: usize, j: usize, k: usize| i + np * (j + np * k);
    let mut hexes = Vec::with_capacity(n * n * n);
    for k in 0..n {
        for j in 0..n {
            for i in 0..n {
                hexes.push(Element::new(
                    CellType::Hexahedron,
                    [
                        vid(i, j, k),
                        vid(i + 1, j, k),
                        vid(i + 1, j + 1, k),
                        vid(i, j + 1, k),
                        vid(i, j, k + 1),
                        vid(i + 1, j, k + 1),
                        vid(i + 1, j + 1, k + 1),
                        vid(i, j + 1, k + 1),
                    ],
                ));
            }
        }
    }
    mesh.add_block("fluid", hexes);
    let bottom = (0..n).flat_map(|j| (0..n).map(move |i| (i, j))).map(|(i, j)| {
        Element::new(
            CellType::Quadrilateral,
            [vid(i, j, 0), vid(i, j + 1, 0), vid(i + 1, j + 1, 0), vid(i + 1, j, 0)],
        )
    });
    mesh.add_domain("bottom", Condition::named("wall"), bottom.collect::<Vec<_>>());
    mesh
}

fn bench_su2_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("su2_write");
    for &n in &[8usize, 24usize] {
        let mesh = hex_grid(n);
        group.bench_with_input(BenchmarkId::new("hex_grid", n), &n, |b, _| {
            let writer = Su2Writer::new();
            let mut out = Vec::with_capacity(1 << 20);
            b.iter(|| {
                out.clear();
                writer.write(&mut out, &mesh, NullProgress).expect("export");
                black_box(out.len());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_su2_write);
criterion_main!(benches);
