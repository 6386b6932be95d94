use super::*;

fn handle(index: u32) -> NodeHandle {
    NodeHandle {
        index,
        generation: 0,
    }
}

#[test]
fn tasks_run_in_post_order() {
    let mut q = UiTaskQueue::default();
    q.post(UiTask {
        node: handle(1),
        status: PseudoState::ACTIVE,
    });
    q.post(UiTask {
        node: handle(1),
        status: PseudoState::NORMAL,
    });
    q.post(UiTask {
        node: handle(2),
        status: PseudoState::FOCUS,
    });
    assert_eq!(q.len(), 3);

    let order: Vec<_> = std::iter::from_fn(|| q.next()).map(|t| t.status).collect();
    assert_eq!(
        order,
        [PseudoState::ACTIVE, PseudoState::NORMAL, PseudoState::FOCUS]
    );
    assert_eq!(q.len(), 0);
}
