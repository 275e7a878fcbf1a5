use dslab::queue::Queue;

quickcheck::quickcheck! {
    fn dequeue_is_fifo(xs: Vec<i32>) -> bool {
        let mut queue: Queue<_> = xs.iter().copied().collect();
        let mut out = Vec::new();
        while let Some(x) = queue.dequeue() {
            out.push(x);
        }

        out == xs && queue.is_empty()
    }

    fn pop_is_lifo(xs: Vec<i32>) -> bool {
        let mut queue: Queue<_> = xs.iter().copied().collect();
        let mut out = Vec::new();
        while let Some(x) = queue.pop() {
            out.push(x);
        }
        out.reverse();

        out == xs && queue.is_empty()
    }

    fn size_counts_survivors(xs: Vec<u8>, dequeues: u8, pops: u8) -> bool {
        let mut queue: Queue<_> = xs.iter().copied().collect();
        let mut removed = 0;
        for _ in 0..dequeues {
            removed += usize::from(queue.dequeue().is_some());
        }
        for _ in 0..pops {
            removed += usize::from(queue.pop().is_some());
        }

        queue.size() == xs.len() - removed
    }

    fn clear_always_empties(xs: Vec<String>) -> bool {
        let mut queue: Queue<_> = xs.into_iter().collect();
        queue.clear();

        queue.is_empty() && queue.size() == 0 && queue.to_string() == "()"
    }

    fn display_lists_front_to_back(xs: Vec<u8>) -> bool {
        let queue: Queue<_> = xs.iter().copied().collect();
        let expected: Vec<_> = xs.iter().map(u8::to_string).collect();

        queue.to_string() == format!("({})", expected.join(" "))
    }
}
