/**
The per-argument "has this been given yet" state machine.

A slot starts [`Unset`][Slot::Unset] and moves to [`Set`][Slot::Set] at most
once; there is no way back. Every value argument owns exactly one slot, which
is what makes the at-most-once guarantee hold for a whole parse pass.
*/
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Slot<T> {
    #[default]
    Unset,
    Set(T),
}

impl<T> Slot<T> {
    #[inline]
    #[must_use]
    pub const fn is_set(&self) -> bool {
        matches!(*self, Slot::Set(_))
    }

    #[inline]
    #[must_use]
    pub const fn get(&self) -> Option<&T> {
        match self {
            Slot::Set(value) => Some(value),
            Slot::Unset => None,
        }
    }

    /**
    Move from `Unset` to `Set(value)`. If the slot was already set, it is left
    untouched and `value` is handed back.
    */
    pub fn fill(&mut self, value: T) -> Result<(), T> {
        match self {
            Slot::Set(_) => Err(value),
            Slot::Unset => {
                *self = Slot::Set(value);
                Ok(())
            }
        }
    }

    #[inline]
    pub fn into_inner(self) -> Option<T> {
        match self {
            Slot::Set(value) => Some(value),
            Slot::Unset => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unset() {
        let slot: Slot<i32> = Slot::default();
        assert!(!slot.is_set());
        assert_eq!(slot.get(), None);
    }

    #[test]
    fn fills_once() {
        let mut slot = Slot::Unset;

        assert_eq!(slot.fill(1), Ok(()));
        assert!(slot.is_set());
        assert_eq!(slot.fill(2), Err(2));
        assert_eq!(slot.get(), Some(&1));
        assert_eq!(slot.into_inner(), Some(1));
    }
}
