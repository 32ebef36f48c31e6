use itemtree::config::GestureConfig;
use itemtree::{DragSession, HoverPosition, ItemKind, StoreEvent, StoreHandle};

use crate::integration::support::{children, create_in, new_store, root};

#[test]
fn drop_clears_drag_item() {
    let mut store = new_store();
    let root = root(&store);
    let folder = create_in(&mut store, &root, ItemKind::Folder);
    let file = create_in(&mut store, &root, ItemKind::File);

    let mut session = DragSession::start(&mut store, &file, &GestureConfig::default()).unwrap();
    assert_eq!(store.snapshot().drag_item_id(), Some(&file));

    session.hover(&mut store, &folder, HoverPosition::Below).unwrap();
    session.drop_on(&mut store, &folder, HoverPosition::Below).unwrap();

    assert_eq!(store.snapshot().drag_item_id(), None);
    assert_eq!(children(&store, &folder), vec![file]);
}

#[test]
fn cancel_clears_drag_item_and_keeps_hovered_position() {
    let mut store = new_store();
    let root = root(&store);
    let a = create_in(&mut store, &root, ItemKind::File);
    let b = create_in(&mut store, &root, ItemKind::File);

    let mut session = DragSession::start(&mut store, &a, &GestureConfig::default()).unwrap();
    session.hover(&mut store, &b, HoverPosition::Below).unwrap();
    session.cancel(&mut store).unwrap();

    assert_eq!(store.snapshot().drag_item_id(), None);
    assert_eq!(children(&store, &root), vec![b, a]);
}

#[test]
fn high_frequency_hover_emits_one_move_per_position() {
    let mut store = new_store();
    let root = root(&store);
    let a = create_in(&mut store, &root, ItemKind::File);
    let b = create_in(&mut store, &root, ItemKind::File);
    let c = create_in(&mut store, &root, ItemKind::File);
    let rx = store.subscribe();

    let mut session = DragSession::start(&mut store, &c, &GestureConfig::default()).unwrap();
    for _ in 0..20 {
        session.hover(&mut store, &a, HoverPosition::Above).unwrap();
    }
    for _ in 0..20 {
        session.hover(&mut store, &b, HoverPosition::Below).unwrap();
    }
    session.drop_on(&mut store, &b, HoverPosition::Below).unwrap();

    let moves = rx
        .try_iter()
        .filter(|e| matches!(e, StoreEvent::ItemMoved { .. }))
        .count();
    assert_eq!(moves, 2);
    assert_eq!(children(&store, &root), vec![a, b, c]);
}

#[test]
fn hovering_a_descendant_is_rejected_without_ending_the_drag() {
    let mut store = new_store();
    let root = root(&store);
    let outer = create_in(&mut store, &root, ItemKind::Folder);
    let inner = create_in(&mut store, &outer, ItemKind::File);
    let sibling = create_in(&mut store, &root, ItemKind::File);

    let mut session = DragSession::start(&mut store, &outer, &GestureConfig::default()).unwrap();
    assert!(session
        .hover(&mut store, &inner, HoverPosition::Above)
        .is_err());
    assert_eq!(store.snapshot().drag_item_id(), Some(&outer));

    session
        .drop_on(&mut store, &sibling, HoverPosition::Below)
        .unwrap();
    assert_eq!(children(&store, &root), vec![sibling, outer]);
}

#[test]
fn gesture_through_shared_handle() {
    let handle = StoreHandle::new(new_store());
    let (folder, file) = handle.write(|store| {
        let (_, folder) = store.create_item(ItemKind::Folder).unwrap();
        let (_, file) = store.create_item(ItemKind::File).unwrap();
        (folder, file)
    });

    handle.write(|store| {
        let session = DragSession::start(store, &file, &GestureConfig::default()).unwrap();
        session
            .drop_on(store, &folder, HoverPosition::from_pointer(30.0, 0.0, 40.0))
            .unwrap();
    });

    let snapshot = handle.snapshot();
    assert_eq!(snapshot.get(&folder).unwrap().children(), &[file]);
    assert_eq!(snapshot.drag_item_id(), None);
}
