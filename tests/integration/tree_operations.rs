use itemtree::{HoverPosition, ItemKind, TreeError};

use crate::integration::support::{children, create_in, new_store, root};

#[test]
fn creation_appends_after_existing_siblings() {
    let mut store = new_store();
    let root = root(&store);
    let (_, a) = store.create_item(ItemKind::File).unwrap();
    let (_, b) = store.create_item(ItemKind::Folder).unwrap();

    assert_eq!(children(&store, &root), vec![a, b]);
}

#[test]
fn folder_below_drop_reparents_as_first_child() {
    let mut store = new_store();
    let root = root(&store);
    let f1 = create_in(&mut store, &root, ItemKind::Folder);
    let a = create_in(&mut store, &root, ItemKind::File);

    let snapshot = store.move_item(&a, &f1, HoverPosition::Below).unwrap();

    assert_eq!(snapshot.get(&f1).unwrap().children(), &[a.clone()]);
    assert_eq!(snapshot.get(&a).unwrap().parent_id.as_ref(), Some(&f1));
    assert_eq!(children(&store, &root), vec![f1]);
}

#[test]
fn sibling_reorder_above() {
    let mut store = new_store();
    let root = root(&store);
    let p = create_in(&mut store, &root, ItemKind::Folder);
    let x = create_in(&mut store, &p, ItemKind::File);
    let y = create_in(&mut store, &p, ItemKind::File);
    let z = create_in(&mut store, &p, ItemKind::File);

    store.move_item(&z, &x, HoverPosition::Above).unwrap();
    assert_eq!(children(&store, &p), vec![z, x, y]);
}

#[test]
fn sibling_reorder_below() {
    let mut store = new_store();
    let root = root(&store);
    let p = create_in(&mut store, &root, ItemKind::Folder);
    let x = create_in(&mut store, &p, ItemKind::File);
    let y = create_in(&mut store, &p, ItemKind::File);
    let z = create_in(&mut store, &p, ItemKind::File);

    store.move_item(&x, &y, HoverPosition::Below).unwrap();
    assert_eq!(children(&store, &p), vec![y, x, z]);
}

#[test]
fn repeated_identical_move_matches_single_move() {
    let mut store = new_store();
    let root = root(&store);
    let folder = create_in(&mut store, &root, ItemKind::Folder);
    let a = create_in(&mut store, &root, ItemKind::File);
    let b = create_in(&mut store, &folder, ItemKind::File);

    for (drag, drop, hovering) in [
        (&a, &b, HoverPosition::Below),
        (&a, &folder, HoverPosition::Below),
        (&a, &folder, HoverPosition::Above),
        (&b, &a, HoverPosition::Above),
    ] {
        let once = store.move_item(drag, drop, hovering).unwrap();
        let twice = store.move_item(drag, drop, hovering).unwrap();
        assert_eq!(*once, *twice);
    }
}

#[test]
fn cycle_is_rejected_and_tree_unchanged() {
    let mut store = new_store();
    let root = root(&store);
    let f = create_in(&mut store, &root, ItemKind::Folder);
    let g = create_in(&mut store, &f, ItemKind::Folder);
    let before = store.snapshot();

    let err = store.move_item(&f, &g, HoverPosition::Below).unwrap_err();

    assert!(matches!(err, TreeError::InvalidTarget { .. }));
    assert_eq!(*store.snapshot(), *before);
    assert_eq!(children(&store, &f), vec![g]);
}

#[test]
fn unknown_ids_are_reported() {
    let mut store = new_store();
    let (_, a) = store.create_item(ItemKind::File).unwrap();
    let ghost = itemtree::ItemId::from("ghost");

    assert_eq!(
        store.move_item(&a, &ghost, HoverPosition::Above).unwrap_err(),
        TreeError::UnknownId(ghost.clone())
    );
    assert_eq!(
        store.set_opened_folder(&ghost).unwrap_err(),
        TreeError::UnknownId(ghost.clone())
    );
    assert_eq!(
        store.set_drag_item(Some(&ghost)).unwrap_err(),
        TreeError::UnknownId(ghost)
    );
}

#[test]
fn moving_between_nested_folders() {
    let mut store = new_store();
    let root = root(&store);
    let src = create_in(&mut store, &root, ItemKind::Folder);
    let dst = create_in(&mut store, &root, ItemKind::Folder);
    let moved = create_in(&mut store, &src, ItemKind::Folder);
    let inside = create_in(&mut store, &moved, ItemKind::File);
    let anchor = create_in(&mut store, &dst, ItemKind::File);

    let snapshot = store.move_item(&moved, &anchor, HoverPosition::Below).unwrap();

    assert!(snapshot.get(&src).unwrap().children().is_empty());
    assert_eq!(snapshot.get(&dst).unwrap().children(), &[anchor, moved.clone()]);
    assert_eq!(snapshot.get(&moved).unwrap().children(), &[inside.clone()]);
    assert_eq!(itemtree::views::depth_of(&snapshot, &inside).unwrap(), 3);
    snapshot.validate().unwrap();
}
