use lifo_core_rs::collections::stack::{
  ArrayStack, ArrayStackConfig, DEFAULT_CAPACITY, LinkedStack, PushOutcome, StackBackend, StackError,
};

fn drain<T, S: StackBackend<T>>(stack: &mut S) -> Vec<T> {
  let mut items = Vec::new();
  while let Ok(item) = stack.pop() {
    items.push(item);
  }
  items
}

/// Deterministic xorshift sequence so interleavings are reproducible.
struct Xorshift(u64);

impl Xorshift {
  fn next_u64(&mut self) -> u64 {
    let mut x = self.0;
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    self.0 = x;
    x
  }
}

fn check_lifo_law<S: StackBackend<usize>>(mut stack: S) {
  let pushed: Vec<usize> = (0..64).map(|value| value * 3).collect();
  for value in &pushed {
    stack.push(*value);
  }

  let expected: Vec<usize> = pushed.iter().rev().copied().collect();
  assert_eq!(drain(&mut stack), expected);
}

fn check_size_accounting<S: StackBackend<u64>>(mut stack: S, seed: u64) {
  let mut rng = Xorshift(seed);
  let mut model: Vec<u64> = Vec::new();

  for _ in 0..2_000 {
    let roll = rng.next_u64();
    if roll % 3 == 0 {
      match stack.pop() {
        | Ok(value) => assert_eq!(Some(value), model.pop()),
        | Err(err) => {
          assert_eq!(err, StackError::Empty);
          assert!(model.is_empty());
        },
      }
    } else {
      stack.push(roll);
      model.push(roll);
    }
    assert_eq!(stack.len(), model.len());
    assert_eq!(stack.is_empty(), model.is_empty());
  }
}

fn check_peek_is_pure<S: StackBackend<i32>>(mut stack: S) {
  for value in [7, -2, 11] {
    stack.push(value);
    let before = stack.len();
    assert_eq!(stack.peek(), Ok(&value));
    assert_eq!(stack.len(), before);
  }
  assert_eq!(stack.pop(), Ok(11));
}

fn check_clone_independence<S: StackBackend<String> + Clone>(mut original: S) {
  for word in ["alpha", "beta", "gamma"] {
    original.push(word.to_owned());
  }

  let mut cloned = original.clone();
  assert_eq!(cloned.len(), original.len());

  cloned.push("delta".to_owned());
  assert_eq!(original.pop(), Ok("gamma".to_owned()));

  assert_eq!(original.len(), 2);
  assert_eq!(cloned.len(), 4);
  assert_eq!(drain(&mut cloned), ["delta", "gamma", "beta", "alpha"]);
  assert_eq!(drain(&mut original), ["beta", "alpha"]);
}

#[test]
fn lifo_law_holds_for_both_backends() {
  check_lifo_law(ArrayStack::new());
  check_lifo_law(ArrayStack::with_capacity(0));
  check_lifo_law(LinkedStack::new());
}

#[test]
fn size_tracks_pushes_minus_pops() {
  for seed in [0x9E37_79B9_7F4A_7C15, 0xDEAD_BEEF, 42] {
    check_size_accounting(ArrayStack::with_capacity(1), seed);
    check_size_accounting(LinkedStack::new(), seed);
  }
}

#[test]
fn peek_never_changes_state() {
  check_peek_is_pure(ArrayStack::new());
  check_peek_is_pure(LinkedStack::new());
}

#[test]
fn clones_are_independent() {
  check_clone_independence(ArrayStack::with_capacity(2));
  check_clone_independence(LinkedStack::new());
}

#[test]
fn array_stack_capacity_management() {
  let mut stack = ArrayStack::from_config(ArrayStackConfig::new().with_initial_capacity(4));
  stack.push('a');
  stack.push('b');

  stack.ensure_capacity(12);
  assert_eq!(stack.capacity(), 12);
  stack.ensure_capacity(6);
  assert_eq!(stack.capacity(), 12);
  assert_eq!(stack.len(), 2);

  stack.trim_to_size();
  assert_eq!(stack.capacity(), stack.len());
  assert_eq!(drain(&mut stack), ['b', 'a']);
}

#[test]
fn array_stack_growth_follows_formula() {
  let mut stack = ArrayStack::new();
  let mut expected_capacity = DEFAULT_CAPACITY;

  for value in 0..(2 * DEFAULT_CAPACITY + 5) {
    let len_before = stack.len();
    let outcome = stack.push(value);
    if len_before == expected_capacity {
      expected_capacity = 2 * len_before + 1;
      assert_eq!(outcome, PushOutcome::GrewTo { capacity: expected_capacity });
    } else {
      assert_eq!(outcome, PushOutcome::Pushed);
    }
    assert_eq!(stack.capacity(), expected_capacity);
  }

  let expected: Vec<usize> = (0..(2 * DEFAULT_CAPACITY + 5)).rev().collect();
  assert_eq!(drain(&mut stack), expected);
}

#[test]
fn array_stack_scenario_small_capacity() {
  let mut stack = ArrayStack::with_capacity(2);
  let grew = [1, 2, 3].into_iter().filter(|value| stack.push(*value).grew()).count();
  assert_eq!(grew, 1);

  assert_eq!(stack.pop(), Ok(3));
  assert_eq!(stack.pop(), Ok(2));
  assert_eq!(stack.pop(), Ok(1));
  assert!(stack.is_empty());
  assert_eq!(stack.pop(), Err(StackError::Empty));
}

#[test]
fn linked_stack_scenario_clone_then_drain() {
  let mut original = LinkedStack::new();
  original.push("A");
  original.push("B");
  original.push("C");

  let mut cloned = original.clone();
  assert_eq!(drain(&mut cloned), ["C", "B", "A"]);

  assert_eq!(original.len(), 3);
  assert_eq!(original.pop(), Ok("C"));
}
