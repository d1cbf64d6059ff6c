use crate::html::Keyword;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenElement {
    pub name: Vec<u8>,
    pub keyword: Keyword,
    pub line: usize,
}

impl OpenElement {
    pub fn new(name: Vec<u8>, line: usize) -> Self {
        OpenElement {
            keyword: Keyword::lookup(&name),
            name,
            line,
        }
    }
}

/// Currently open elements, innermost last. An empty stack means "no parent".
#[derive(Debug, Default)]
pub struct ElementStack(Vec<OpenElement>);

impl ElementStack {
    #[inline]
    pub fn push(&mut self, element: OpenElement) {
        self.0.push(element);
    }

    #[inline]
    pub fn parent(&self) -> Option<&OpenElement> {
        self.0.last()
    }

    #[inline]
    pub fn pop(&mut self) -> Option<OpenElement> {
        self.0.pop()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Pops the innermost element if it's nested deeper than `index`.
    #[inline]
    pub fn pop_above(&mut self, index: usize) -> Option<OpenElement> {
        if self.0.len() > index + 1 {
            self.0.pop()
        } else {
            None
        }
    }

    /// Finds the element a close tag with the given name refers to.
    ///
    /// The search goes from the innermost element outwards and gives up on
    /// the first element that structurally owns the sought name, so e.g.
    /// a stray `</tr>` can't close anything outside of the `<table>` it's in.
    pub fn find_matching_close_tag(&self, name: &[u8]) -> Option<usize> {
        let keyword = Keyword::lookup(name);

        for (index, element) in self.0.iter().enumerate().rev() {
            if element.name.eq_ignore_ascii_case(name) {
                return Some(index);
            } else if keyword.is_contained_in(element.keyword) {
                return None;
            }
        }

        None
    }
}
