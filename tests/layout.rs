use trellis::prelude::*;
use trellis::widgets::Error;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn rects(tree: &Tree, root: WidgetId) -> Vec<(WidgetId, Option<Rect>)> {
    let mut out = vec![];
    let mut stack = vec![root];
    while let Some(id) = stack.pop() {
        out.push((id, tree.rect(id).unwrap()));
        stack.extend(tree.children(id).unwrap());
    }
    out
}

/// A window holding a column: a row of spacers, a grid and a framed stack
fn sample_tree() -> (Tree, WidgetId, Vec<WidgetId>) {
    let mut tree = Tree::new();
    let vbox = tree.add_vbox();
    tree.set_padding(vbox, 4).unwrap();

    let hbox = tree.add_hbox();
    tree.set_padding(hbox, 2).unwrap();
    let mut leaves = vec![];
    for (i, w) in [20, 30, 40].into_iter().enumerate() {
        let spacer = tree.add_spacer(Size(w, 10 + w / 2));
        tree.box_mut(hbox).unwrap().add(spacer, i == 1, None).unwrap();
        leaves.push(spacer);
    }

    let grid = tree.add_grid();
    tree.set_padding(grid, 3).unwrap();
    for (row, col) in [(0, 0), (0, 1), (1, 0)] {
        let spacer = tree.add_spacer(Size(15, 15));
        tree.grid_mut(grid)
            .unwrap()
            .add(row, col, spacer, Some(Placement::Center))
            .unwrap();
        leaves.push(spacer);
    }
    tree.grid_mut(grid).unwrap().set_col_width(1, 0).unwrap();

    let frame = tree.add_frame();
    tree.frame_mut(frame)
        .unwrap()
        .set_edge(Size(4, 4), "left", true)
        .unwrap();
    let stack = tree.add_stack();
    tree.attach(stack, frame).unwrap();
    for placement in [Placement::Fill, Placement::TopRight] {
        let spacer = tree.add_spacer(Size(25, 12));
        tree.stack_mut(stack).unwrap().add(spacer, Some(placement)).unwrap();
        leaves.push(spacer);
    }

    let mut column = tree.box_mut(vbox).unwrap();
    column.add(hbox, false, None).unwrap();
    column.add(grid, true, None).unwrap();
    column.add(frame, false, Some(Placement::BottomCenter)).unwrap();
    tree.set_root(vbox).unwrap();
    (tree, vbox, leaves)
}

#[test]
fn layout_is_idempotent() {
    init_logger();
    let (mut tree, root, _) = sample_tree();
    let rect = Rect::from_dimensions(0, 0, 300, 200);
    tree.resize_root(rect).unwrap();
    let first = rects(&tree, root);
    tree.resize_root(rect).unwrap();
    assert_eq!(rects(&tree, root), first);
    assert!(first.iter().all(|(_, r)| r.is_some()));
}

#[test]
fn children_are_contained() {
    init_logger();
    let (mut tree, root, _) = sample_tree();
    let min = tree.claim(root).unwrap();
    for size in [min, min + Size(1, 1), min + Size(123, 45)] {
        tree.resize_root(Rect::new(Coord(7, -3), size)).unwrap();

        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let children = tree.children(id).unwrap();
            if children.is_empty() {
                continue;
            }
            let rect = tree.rect(id).unwrap().unwrap();
            let inner = rect.shrink(tree.padding(id).unwrap());
            for child in children {
                let child_rect = tree.rect(child).unwrap().unwrap();
                assert!(
                    inner.contains_rect(&child_rect),
                    "{child_rect:?} not within {inner:?}:{}",
                    tree.hierarchy(root)
                );
                stack.push(child);
            }
        }
    }
}

#[test]
fn claim_is_monotonic() {
    init_logger();
    let (mut tree, root, leaves) = sample_tree();
    let mut previous = tree.claim(root).unwrap();
    for (i, leaf) in leaves.into_iter().enumerate() {
        let grown = tree.leaf::<Spacer>(leaf).unwrap().min_size() + Size(3, 1 + i as i32);
        tree.set_spacer_size(leaf, grown).unwrap();
        let claim = tree.claim(root).unwrap();
        assert!(claim >= previous, "{claim:?} < {previous:?}");
        previous = claim;
    }
}

#[test]
fn box_distribution_sum() {
    let mut tree = Tree::new();
    let hbox = tree.add_hbox();
    tree.set_padding(hbox, 5).unwrap();
    for (w, h) in [(20, 8), (30, 17), (40, 11)] {
        let spacer = tree.add_spacer(Size(w, h));
        tree.attach(spacer, hbox).unwrap();
    }
    assert_eq!(tree.claim(hbox), Ok(Size(110, 27)));
}

#[test]
fn box_expand_fill() {
    let mut tree = Tree::new();
    let hbox = tree.add_hbox();
    let fixed_a = tree.add_spacer(Size(30, 5));
    let expand = tree.add_spacer(Size(20, 5));
    let fixed_b = tree.add_spacer(Size(30, 5));
    let mut b = tree.box_mut(hbox).unwrap();
    b.add(fixed_a, false, None).unwrap();
    b.add(expand, true, None).unwrap();
    b.add(fixed_b, false, None).unwrap();
    tree.resize(hbox, Rect::from_size(Size(200, 5))).unwrap();
    assert_eq!(tree.rect(expand).unwrap().map(|r| r.width()), Some(140));
}

#[test]
fn vbox_expand_fill() {
    let mut tree = Tree::new();
    let vbox = tree.add_vbox();
    let header = tree.add_spacer(Size(5, 30));
    let body = tree.add_spacer(Size(5, 20));
    let footer = tree.add_spacer(Size(5, 30));
    let mut b = tree.box_mut(vbox).unwrap();
    b.add(header, false, None).unwrap();
    b.add(body, true, None).unwrap();
    b.add(footer, false, None).unwrap();
    tree.resize(vbox, Rect::from_dimensions(0, -50, 5, 200)).unwrap();

    let rect_of = |id| tree.rect(id).unwrap().unwrap();
    assert_eq!(rect_of(header), Rect::from_dimensions(0, 120, 5, 30));
    assert_eq!(rect_of(body), Rect::from_dimensions(0, -20, 5, 140));
    assert_eq!(rect_of(footer), Rect::from_dimensions(0, -50, 5, 30));
}

#[test]
fn grid_shape_deduction() {
    let mut tree = Tree::new();
    let grid = tree.add_grid();
    for (row, col) in [(0, 0), (0, 1), (1, 0)] {
        let spacer = tree.add_spacer(Size(1, 1));
        tree.grid_mut(grid).unwrap().add(row, col, spacer, None).unwrap();
    }
    let dim = tree.grid(grid).unwrap().dimensions();
    assert_eq!((dim.rows, dim.cols), (2, 2));
}

#[test]
fn grid_tiling() {
    let mut tree = Tree::new();
    let grid = tree.add_grid();
    tree.set_padding(grid, 2).unwrap();
    let mut cells = vec![];
    for row in 0..3 {
        for col in 0..4 {
            let spacer = tree.add_spacer(Size(5, 5));
            tree.grid_mut(grid).unwrap().add(row, col, spacer, None).unwrap();
            cells.push((row, col, spacer));
        }
    }
    let rect = Rect::from_dimensions(-10, 10, 107, 71);
    tree.resize(grid, rect).unwrap();

    let rect_of = |id| tree.rect(id).unwrap().unwrap();
    let total_width: i32 = cells
        .iter()
        .filter(|(row, _, _)| *row == 0)
        .map(|(_, _, id)| rect_of(*id).width())
        .sum();
    assert_eq!(total_width + 2 * 5, rect.width());
    let total_height: i32 = cells
        .iter()
        .filter(|(_, col, _)| *col == 0)
        .map(|(_, _, id)| rect_of(*id).height())
        .sum();
    assert_eq!(total_height + 2 * 4, rect.height());

    for (row, col, id) in &cells {
        let r = rect_of(*id);
        if *col == 0 {
            assert_eq!(r.left(), rect.left() + 2);
        }
        if *row == 0 {
            assert_eq!(r.top(), rect.top() - 2);
        }
        if let Some((_, _, right)) = cells.iter().find(|(r2, c2, _)| r2 == row && *c2 == col + 1) {
            assert_eq!(rect_of(*right).left(), r.right() + 2);
        }
    }
}

#[test]
fn viewport_clamp() {
    let mut tree = Tree::new();
    let viewport = tree.add_viewport();
    let content = tree.add_spacer(Size(500, 500));
    tree.attach(content, viewport).unwrap();
    tree.set_root(viewport).unwrap();
    tree.resize_root(Rect::from_size(Size(100, 100))).unwrap();
    let child = tree.rect(content).unwrap().unwrap();

    tree.viewport_mut(viewport)
        .unwrap()
        .set_panning_vector(Offset(1000, 0))
        .unwrap();
    let pan = tree.viewport(viewport).unwrap().panning_vector();
    assert_eq!(pan.0, child.right() - 100);

    tree.viewport_mut(viewport)
        .unwrap()
        .set_panning_vector(Offset(-1000, 0))
        .unwrap();
    let pan = tree.viewport(viewport).unwrap().panning_vector();
    assert_eq!(pan.0, child.left());
}

#[test]
fn viewport_deferred_centering() {
    let mut tree = Tree::new();
    let viewport = tree.add_viewport();
    let content = tree.add_spacer(Size(800, 600));
    let mut vp = tree.viewport_mut(viewport).unwrap();
    vp.set_child(content).unwrap();
    vp.set_center_of_view(Coord(400, 300)).unwrap();

    let window = tree.add_bin();
    tree.attach(viewport, window).unwrap();
    tree.set_root(window).unwrap();
    tree.resize_root(Rect::from_size(Size(200, 100))).unwrap();

    let view = tree.viewport(viewport).unwrap();
    assert_eq!(view.panning_vector(), Offset(300, 250));
    assert_eq!(view.visible_area().unwrap().center(), Coord(400, 300));
}

#[test]
fn bin_replaces() {
    let mut tree = Tree::new();
    let bin = tree.add_bin();
    let first = tree.add_spacer(Size(10, 10));
    let second = tree.add_spacer(Size(3, 3));
    tree.attach(first, bin).unwrap();
    tree.attach(second, bin).unwrap();
    assert_eq!(tree.children(bin), Ok(vec![second]));
    assert_eq!(tree.parent(first), Ok(None));
    assert_eq!(tree.claim(bin), Ok(Size(3, 3)));
}

#[test]
fn live_resize_updates_layout() {
    init_logger();
    let mut tree = Tree::new();
    let vbox = tree.add_vbox();
    let top = tree.add_spacer(Size(10, 10));
    let bottom = tree.add_spacer(Size(10, 10));
    tree.attach(top, vbox).unwrap();
    tree.attach(bottom, vbox).unwrap();
    tree.set_root(vbox).unwrap();
    tree.resize_root(Rect::from_size(Size(50, 50))).unwrap();
    assert_eq!(tree.rect(bottom), Ok(Some(Rect::from_dimensions(0, 30, 50, 10))));

    tree.set_spacer_size(top, Size(10, 25)).unwrap();
    assert_eq!(tree.rect(bottom), Ok(Some(Rect::from_dimensions(0, 15, 50, 10))));
}

#[test]
fn grid_rejects_huge_index() {
    let mut tree = Tree::new();
    let grid = tree.add_grid();
    let spacer = tree.add_spacer(Size(5, 5));
    assert!(matches!(
        tree.grid_mut(grid).unwrap().add(u32::MAX, 0, spacer, None),
        Err(Error::IndexOutOfRange { .. })
    ));
    assert_eq!(tree.parent(spacer), Ok(None));
    assert_eq!(tree.children(grid), Ok(vec![]));
    assert_eq!(tree.claim(grid), Ok(Size::ZERO));
}

#[test]
fn errors_leave_tree_unchanged() {
    let mut tree = Tree::new();
    let outer = tree.add_stack();
    let inner = tree.add_stack();
    let leaf = tree.add_spacer(Size(1, 1));
    tree.attach(inner, outer).unwrap();
    tree.attach(leaf, inner).unwrap();

    assert_eq!(
        tree.attach(outer, inner),
        Err(Error::WouldCycle {
            child: outer,
            parent: inner
        })
    );
    assert_eq!(
        tree.stack_mut(outer).unwrap().insert(leaf, 7, None),
        Err(Error::IndexOutOfRange { index: 7, len: 1 })
    );
    assert_eq!(tree.parent(leaf), Ok(Some(inner)));
    assert_eq!(tree.children(outer), Ok(vec![inner]));

    let grid = tree.add_grid();
    assert!(matches!(
        tree.attach(leaf, grid),
        Err(Error::WrongKind { found: "Grid", .. })
    ));
    assert!(matches!(
        tree.set_padding(leaf, 3),
        Err(Error::WrongKind { found: "Leaf", .. })
    ));
    assert_eq!(tree.parent(leaf), Ok(Some(inner)));
}
