use seqkit_common::{Result, error::Error};

/// A last-in, first-out stack backed by a `Vec`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack<T> {
    data: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Stack<T> {
        Stack { data: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Stack<T> {
        Stack {
            data: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, value: T) {
        self.data.push(value);
    }

    /// Removes and returns the top element.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty.
    #[track_caller]
    pub fn pop(&mut self) -> T {
        match self.data.pop() {
            Some(value) => value,
            None => empty_stack(),
        }
    }

    /// Returns the top element.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty.
    #[track_caller]
    pub fn top(&self) -> &T {
        match self.data.last() {
            Some(value) => value,
            None => empty_stack(),
        }
    }

    /// Returns the top element for in-place modification.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty.
    #[track_caller]
    pub fn top_mut(&mut self) -> &mut T {
        match self.data.last_mut() {
            Some(value) => value,
            None => empty_stack(),
        }
    }

    pub fn try_pop(&mut self) -> Result<T> {
        self.data.pop().ok_or_else(|| Error::empty_container("stack"))
    }

    pub fn try_top(&self) -> Result<&T> {
        self.data.last().ok_or_else(|| Error::empty_container("stack"))
    }

    /// Returns the top element, or `None` if the stack is empty.
    pub fn peek(&self) -> Option<&T> {
        self.data.last()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cold]
#[track_caller]
fn empty_stack() -> ! {
    panic!("stack is empty")
}

#[cfg(test)]
mod tests {
    use seqkit_common::error::ErrorKind;

    use super::*;

    #[test]
    fn test_lifo_order() {
        let mut s = Stack::with_capacity(4);
        for i in 0..10 {
            s.push(i);
        }
        assert_eq!(s.len(), 10);
        assert_eq!(*s.top(), 9);
        for i in (0..10).rev() {
            assert_eq!(s.pop(), i);
        }
        assert!(s.is_empty());
    }

    #[test]
    fn test_top_mut() {
        let mut s = Stack::new();
        s.push(String::from("a"));
        s.top_mut().push('b');
        assert_eq!(s.top(), "ab");
        assert_eq!(s.peek().map(|v| v.len()), Some(2));
    }

    #[test]
    fn test_try_variants() {
        let mut s = Stack::<u8>::new();
        assert!(s.peek().is_none());
        let err = s.try_pop().unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::EmptyContainer { .. }));
        assert_eq!(err.to_string(), "stack is empty");
        assert!(s.try_top().is_err());

        s.push(7);
        assert_eq!(*s.try_top().unwrap(), 7);
        assert_eq!(s.try_pop().unwrap(), 7);
    }

    #[test]
    #[should_panic(expected = "stack is empty")]
    fn test_pop_empty_panics() {
        Stack::<i32>::new().pop();
    }

    #[test]
    #[should_panic(expected = "stack is empty")]
    fn test_top_empty_panics() {
        Stack::<i32>::new().top();
    }

    #[test]
    #[should_panic(expected = "stack is empty")]
    fn test_top_mut_empty_panics() {
        Stack::<i32>::new().top_mut();
    }
}
