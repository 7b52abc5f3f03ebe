use safe_ops::{safe_op, safe_test, SafeOption};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_helpers_run_from_many_tasks() {
    let transform_calls = Arc::new(AtomicUsize::new(0));
    let mut handles = Vec::new();

    for i in 0..64usize {
        let transform_calls = Arc::clone(&transform_calls);
        handles.push(tokio::spawn(async move {
            let value = if i % 2 == 0 { Some(i) } else { None };
            let doubled = safe_op(value, usize::MAX, |n| {
                transform_calls.fetch_add(1, Ordering::SeqCst);
                n * 2
            });
            let positive = value.safe_test(|n| n > 0);
            (i, doubled, positive)
        }));
    }

    for handle in handles {
        let (i, doubled, positive) = handle.await.unwrap();
        if i % 2 == 0 {
            assert_eq!(doubled, i * 2);
            assert_eq!(positive, i > 0);
        } else {
            assert_eq!(doubled, usize::MAX);
            assert!(!positive);
        }
    }

    assert_eq!(transform_calls.load(Ordering::SeqCst), 32);
}

#[test]
fn test_helpers_run_from_scoped_threads() {
    let names = vec![Some("alpha"), None, Some("gamma"), None];

    let results: Vec<bool> = std::thread::scope(|scope| {
        let handles: Vec<_> = names
            .iter()
            .map(|name| scope.spawn(move || safe_test(*name, |s| s.ends_with('a'))))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results, vec![true, false, true, false]);
}
