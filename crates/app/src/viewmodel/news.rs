//! News page view model

use std::sync::Arc;

use etumlabs_core::filter;
use etumlabs_core::{Catalog, NewsArticle};

pub struct NewsViewModel {
    catalog: Arc<Catalog>,
}

impl NewsViewModel {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Featured articles first, then the rest, each in catalog order
    pub fn sections(&self) -> (Vec<&NewsArticle>, Vec<&NewsArticle>) {
        filter::split_news(&self.catalog.news)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_split_on_featured() {
        let vm = NewsViewModel::new(Arc::new(Catalog::sample().unwrap()));
        let (featured, regular) = vm.sections();
        assert_eq!(featured.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(regular.iter().map(|a| a.id).collect::<Vec<_>>(), vec![3, 4, 5]);
    }
}
