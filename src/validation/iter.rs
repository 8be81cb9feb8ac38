use crate::validation::core::Validation;
use crate::validation::ErrorVec;

pub struct Iter<'a, A> {
    inner: Option<&'a A>,
}

impl<'a, A> Iterator for Iter<'a, A> {
    type Item = &'a A;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

pub struct IterMut<'a, A> {
    inner: Option<&'a mut A>,
}

impl<'a, A> Iterator for IterMut<'a, A> {
    type Item = &'a mut A;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

pub struct IntoIter<A> {
    inner: Option<A>,
}

impl<A> Iterator for IntoIter<A> {
    type Item = A;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

pub enum ErrorsIterMut<'a, E> {
    Empty,
    Multi(core::slice::IterMut<'a, E>),
}

impl<'a, E> Iterator for ErrorsIterMut<'a, E> {
    type Item = &'a mut E;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            ErrorsIterMut::Empty => None,
            ErrorsIterMut::Multi(it) => it.next(),
        }
    }
}

impl<E, A> IntoIterator for Validation<E, A> {
    type Item = A;
    type IntoIter = IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.into_value(),
        }
    }
}

impl<'a, E, A> IntoIterator for &'a Validation<E, A> {
    type Item = &'a A;
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, E, A> IntoIterator for &'a mut Validation<E, A> {
    type Item = &'a mut A;
    type IntoIter = IterMut<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<E, A> Validation<E, A> {
    pub fn iter(&self) -> Iter<'_, A> {
        match self {
            Validation::Valid(a) => Iter { inner: Some(a) },
            _ => Iter { inner: None },
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, A> {
        match self {
            Validation::Valid(a) => IterMut { inner: Some(a) },
            _ => IterMut { inner: None },
        }
    }

    pub fn iter_errors(&self) -> impl Iterator<Item = &E> {
        match self {
            Self::Valid(_) => [].iter(),
            Self::Invalid(errors) => errors.iter(),
        }
    }

    pub fn iter_errors_mut(&mut self) -> ErrorsIterMut<'_, E> {
        match self {
            Validation::Invalid(errors) => ErrorsIterMut::Multi(errors.iter_mut()),
            _ => ErrorsIterMut::Empty,
        }
    }
}

/// Collects many outcomes into one, keeping every error encountered.
///
/// The result is valid only when every item was valid; otherwise all error
/// lists are concatenated in iteration order.
///
/// # Examples
///
/// ```
/// use form_rail::validation::Validation;
///
/// let items = vec![
///     Validation::<&str, i32>::valid(1),
///     Validation::invalid("bad"),
///     Validation::invalid("worse"),
/// ];
/// let collected: Validation<&str, Vec<i32>> = items.into_iter().collect();
/// assert_eq!(collected.into_errors().unwrap().len(), 2);
/// ```
impl<E, A, C> FromIterator<Validation<E, A>> for Validation<E, C>
where
    C: Default + Extend<A>,
{
    fn from_iter<I: IntoIterator<Item = Validation<E, A>>>(iter: I) -> Self {
        let mut values = C::default();
        let mut errors = ErrorVec::<E>::new();
        for item in iter {
            match item {
                Validation::Valid(value) => values.extend(Some(value)),
                Validation::Invalid(item_errors) => errors.extend(item_errors),
            }
        }
        if errors.is_empty() {
            Validation::Valid(values)
        } else {
            Validation::Invalid(errors)
        }
    }
}

/// Collects plain `Result`s, accumulating every `Err` instead of stopping at
/// the first one.
///
/// # Examples
///
/// ```
/// use form_rail::validation::Validation;
///
/// let inputs = vec![Ok(1), Err("err1"), Err("err2")];
/// let collected: Validation<&str, Vec<i32>> = inputs.into_iter().collect();
/// assert_eq!(collected.into_errors().unwrap().len(), 2);
/// ```
impl<E, A, C> FromIterator<Result<A, E>> for Validation<E, C>
where
    C: Default + Extend<A>,
{
    fn from_iter<I: IntoIterator<Item = Result<A, E>>>(iter: I) -> Self {
        iter.into_iter().map(Validation::from_result).collect()
    }
}
