//! Property tests: random operation sequences never break the tree.

use itemtree::{HoverPosition, ItemId, ItemKind, ItemStore, TreeError};
use proptest::prelude::*;

use crate::integration::support::new_store;

#[derive(Debug, Clone)]
enum Op {
    Create(ItemKind),
    Open(usize),
    Move(usize, usize, HoverPosition),
    Drag(Option<usize>),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let kind = prop_oneof![Just(ItemKind::File), Just(ItemKind::Folder)];
    let hovering = prop_oneof![Just(HoverPosition::Above), Just(HoverPosition::Below)];
    prop_oneof![
        3 => kind.prop_map(Op::Create),
        1 => any::<usize>().prop_map(Op::Open),
        5 => (any::<usize>(), any::<usize>(), hovering).prop_map(|(a, b, h)| Op::Move(a, b, h)),
        1 => proptest::option::of(any::<usize>()).prop_map(Op::Drag),
    ]
}

/// Pick an existing id by index; ids are sorted so runs are reproducible
fn pick(store: &ItemStore, index: usize) -> ItemId {
    let snapshot = store.snapshot();
    let mut ids: Vec<ItemId> = snapshot.items().map(|item| item.id.clone()).collect();
    ids.sort();
    ids[index % ids.len()].clone()
}

fn apply(store: &mut ItemStore, op: &Op) -> Result<(), TreeError> {
    match op {
        Op::Create(kind) => store.create_item(*kind).map(|_| ()),
        Op::Open(i) => {
            let id = pick(store, *i);
            store.set_opened_folder(&id).map(|_| ())
        }
        Op::Move(a, b, hovering) => {
            let drag = pick(store, *a);
            let drop = pick(store, *b);
            store.move_item(&drag, &drop, *hovering).map(|_| ())
        }
        Op::Drag(i) => {
            let id = i.map(|i| pick(store, i));
            store.set_drag_item(id.as_ref()).map(|_| ())
        }
    }
}

proptest! {
    #[test]
    fn invariants_hold_after_every_operation(ops in prop::collection::vec(op_strategy(), 1..60)) {
        let mut store = new_store();
        for op in &ops {
            let before = store.snapshot();
            let result = apply(&mut store, op);
            let after = store.snapshot();
            if result.is_err() {
                prop_assert_eq!(&*after, &*before);
            }
            let validation = after.validate();
            prop_assert!(validation.is_ok(), "after {:?}: {:?}", op, validation);
        }
    }

    #[test]
    fn second_identical_move_is_noop(
        ops in prop::collection::vec(op_strategy(), 1..40),
        a in any::<usize>(),
        b in any::<usize>(),
        below in any::<bool>(),
    ) {
        let mut store = new_store();
        for op in &ops {
            let _ = apply(&mut store, op);
        }
        let drag = pick(&store, a);
        let drop = pick(&store, b);
        let hovering = if below { HoverPosition::Below } else { HoverPosition::Above };

        if let Ok(once) = store.move_item(&drag, &drop, hovering) {
            let revision = store.revision();
            let twice = store.move_item(&drag, &drop, hovering).unwrap();
            prop_assert_eq!(&*once, &*twice);
            prop_assert_eq!(store.revision(), revision);
        }
    }

    #[test]
    fn moved_item_is_linked_exactly_once(
        ops in prop::collection::vec(op_strategy(), 1..40),
        a in any::<usize>(),
        b in any::<usize>(),
    ) {
        let mut store = new_store();
        for op in &ops {
            let _ = apply(&mut store, op);
        }
        let drag = pick(&store, a);
        let drop = pick(&store, b);

        if let Ok(snapshot) = store.move_item(&drag, &drop, HoverPosition::Above) {
            let links = snapshot
                .items()
                .filter(|item| item.children().contains(&drag))
                .count();
            prop_assert_eq!(links, 1);
            let parent = snapshot.get(&drag).unwrap().parent_id.clone().unwrap();
            prop_assert!(snapshot.get(&parent).unwrap().children().contains(&drag));
        }
    }
}
