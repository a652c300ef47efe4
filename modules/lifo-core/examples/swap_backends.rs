use lifo_core_rs::collections::stack::{ArrayStack, LinkedStack, StackBackend, StackError};

/// Checks bracket balance with whichever backing store the caller picks.
fn balanced<S: StackBackend<char>>(mut pending: S, input: &str) -> Result<bool, StackError> {
  for ch in input.chars() {
    match ch {
      | '(' | '[' | '{' => {
        pending.push(ch);
      },
      | ')' | ']' | '}' => {
        if pending.is_empty() {
          return Ok(false);
        }
        let open = pending.pop()?;
        if !matches!((open, ch), ('(', ')') | ('[', ']') | ('{', '}')) {
          return Ok(false);
        }
      },
      | _ => {},
    }
  }
  Ok(pending.is_empty())
}

fn main() -> Result<(), StackError> {
  let inputs = ["fn main() { let v = [1, 2]; }", "([)]", "{{}"];

  for input in inputs {
    let with_array = balanced(ArrayStack::with_capacity(0), input)?;
    let with_linked = balanced(LinkedStack::new(), input)?;
    assert_eq!(with_array, with_linked);
    println!("{input:<32} balanced: {with_array}");
  }

  let mut original = LinkedStack::new();
  original.push("first");
  original.push("second");
  let mut copy = original.clone();
  copy.push("third");
  println!("original len {}, copy len {}, copy top {:?}", original.len(), copy.len(), copy.peek()?);

  let mut array = ArrayStack::new();
  array.ensure_capacity(32);
  array.push(1_u32);
  array.trim_to_size();
  println!("array capacity after trim: {}", array.capacity());
  Ok(())
}
