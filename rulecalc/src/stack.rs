/// LIFO used by both the parser (pending operators) and the evaluator
/// (intermediate values). Each phase gets its own typed instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Stack<T>(Vec<T>);

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack(Vec::new())
    }
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: T) {
        self.0.push(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.0.pop()
    }

    pub fn peek(&self) -> Option<&T> {
        self.0.last()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Pops every item, top first.
    pub fn drain_top(&mut self) -> impl Iterator<Item = T> + '_ {
        self.0.drain(..).rev()
    }
}
