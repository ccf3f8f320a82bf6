use std::cell::Cell;
use std::rc::Rc;

/// An object-typed element that counts how many live values sharing its counter have been
/// dropped. The default value holds no counter and plays the role of a cleared slot.
#[derive(Debug, Clone, Default)]
pub struct Tracked {
    pub id: usize,
    pub counter: Option<Rc<Cell<usize>>>,
}

impl Tracked {
    pub fn new(id: usize, counter: &Rc<Cell<usize>>) -> Tracked {
        Tracked {
            id,
            counter: Some(Rc::clone(counter)),
        }
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.counter.is_some() == other.counter.is_some()
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        if let Some(counter) = &self.counter {
            counter.set(counter.get() + 1);
        }
    }
}
