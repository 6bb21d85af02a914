use crate::layout::CatalogView;
use contracts::domain::a001_category::Category;
use leptos::prelude::*;

/// Список категорий: статичный пункт "All" и категории из API.
///
/// Mounted into the categories container; renders `<li>` items only.
#[component]
#[allow(non_snake_case)]
pub fn CategoryList(catalog: CatalogView, on_select: Callback<Category>) -> impl IntoView {
    view! {
        {move || catalog.items().into_iter().map(|category| {
            let slug = category.slug.clone();
            let label = category.name.clone();
            let category_for_active = category.clone();
            view! {
                <li
                    class="category"
                    class:active=move || catalog.is_active(&category_for_active)
                    data-category=slug
                    on:click=move |_| on_select.run(category.clone())
                >
                    {label}
                </li>
            }
        }).collect_view()}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(catalog: CatalogView) -> String {
        let on_select = Callback::new(|_: Category| {});
        view! { <CategoryList catalog=catalog on_select=on_select /> }.to_html()
    }

    #[test]
    fn test_items_carry_slug_and_label() {
        let catalog = CatalogView::new();
        catalog.set_categories(vec![
            Category::new("smartphones"),
            Category::with_name("mens-shirts", "Mens Shirts"),
        ]);
        let html = render(catalog);

        assert_eq!(html.matches("<li").count(), 3);
        assert!(html.contains(r#"data-category="All""#));
        assert!(html.contains(r#"data-category="smartphones""#));
        assert!(html.contains(r#"data-category="mens-shirts""#));
        assert!(html.contains("Mens Shirts"));
        assert!(html.find(r#"data-category="All""#) < html.find(r#"data-category="smartphones""#));
    }

    #[test]
    fn test_only_active_item_is_marked() {
        let catalog = CatalogView::new();
        catalog.set_categories(vec![Category::new("smartphones"), Category::new("laptops")]);
        assert_eq!(render(catalog).matches("active").count(), 0);

        catalog.set_active(Category::new("laptops"));
        let html = render(catalog);
        let marked: Vec<&str> = html
            .split("<li")
            .filter(|item| item.contains("active"))
            .collect();
        assert_eq!(marked.len(), 1);
        assert!(marked[0].contains(r#"data-category="laptops""#));
    }
}
