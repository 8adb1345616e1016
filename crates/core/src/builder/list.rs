use super::{BuildContext, BuilderRepository, TexChunkBuilder};
use crate::error::{BuildError, RegistryError};
use crate::items::{List, ListStyle};
use crate::tex::list_writer;

pub(super) fn register(repository: &mut BuilderRepository) -> Result<(), RegistryError> {
    repository.register_chunk(ListBuilder)?;
    Ok(())
}

pub struct ListBuilder;

impl TexChunkBuilder for ListBuilder {
    type Item = List;

    fn chunk(&self, list: &List, repository: &BuilderRepository) -> Result<String, BuildError> {
        let items = list
            .items()
            .iter()
            .map(|item| repository.chunk_for(&**item))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(match list.style {
            ListStyle::Itemized => list_writer::itemized(&items),
            ListStyle::Enumerated => list_writer::enumerated(&items),
        })
    }

    fn build(&self, list: &List, cx: &mut BuildContext<'_>) -> Result<(), BuildError> {
        let tex = self.chunk(list, cx.repository)?;
        cx.append(&tex);
        for item in list.items() {
            cx.track_all(item.items());
        }
        cx.track_all(list.items());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::BuildTracker;
    use crate::items::{node, NodeRef, Text};

    fn report_list(count: usize) -> (String, usize) {
        let repository = BuilderRepository::with_defaults().unwrap();
        let mut tracker = BuildTracker::new();
        let items = (0..count).map(|i| Text::new(format!("item {}", i)));
        let list: NodeRef = node(List::enumerated(items));
        repository.report(&list, &mut tracker).unwrap();
        (tracker.tex().to_string(), tracker.tracked_objects().len())
    }

    #[test]
    fn test_item_markers_follow_input_order() {
        for count in [0, 1, 5] {
            let (tex, tracked) = report_list(count);
            assert_eq!(tex.matches("\\item ").count(), count);
            let positions: Vec<usize> = (0..count)
                .map(|i| tex.find(&format!("\\item item {}\n", i)).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
            // the list itself plus its texts
            assert_eq!(tracked, count + 1);
        }
    }

    #[test]
    fn test_empty_list_has_no_markup() {
        assert_eq!(report_list(0).0, "");
    }

    #[test]
    fn test_itemized() {
        let repository = BuilderRepository::with_defaults().unwrap();
        let list = List::itemized([Text::new("a"), Text::new("b")]);
        assert_eq!(
            repository.chunk_for(&list).unwrap(),
            "\\begin{itemize}\n\\item a\n\\item b\n\\end{itemize}\n"
        );
    }

    #[test]
    fn test_nested_items_are_tracked_before_texts() {
        let repository = BuilderRepository::with_defaults().unwrap();
        let mut tracker = BuildTracker::new();
        let inner: NodeRef = node(Text::new("inner"));
        let list: NodeRef = node(List::itemized([Text::new("outer {0}").with_item(inner.clone())]));
        repository.report(&list, &mut tracker).unwrap();

        let tracked = tracker.tracked_objects();
        assert_eq!(tracked.len(), 3);
        assert!(std::sync::Arc::ptr_eq(&tracked[0], &inner));
        assert!(std::sync::Arc::ptr_eq(&tracked[2], &list));
    }
}
