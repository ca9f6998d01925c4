//! Server-rendered HTML views.
//!
//! Pages are assembled as plain strings: the list page takes the items, the
//! add/edit pages take the current form state (values plus field errors).
//! All interpolated user data goes through [`escape`].

use todo_core::{
  item::{Item, ItemId},
  validate::{FORM_FIELDS, ItemInput, NAME_MAX_LEN, ValidationErrors},
};

/// Escape `&`, `<`, `>` and `"` for safe embedding in HTML text and
/// attribute values.
pub fn escape(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for c in s.chars() {
    match c {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      _ => out.push(c),
    }
  }
  out
}

fn page(title: &str, body: &str) -> String {
  format!(
    "<!DOCTYPE html>\n\
     <html lang=\"en\">\n\
     <head><meta charset=\"utf-8\"><title>{title}</title></head>\n\
     <body>\n<h1>{title}</h1>\n{body}</body>\n\
     </html>\n",
    title = escape(title),
  )
}

// ─── List ────────────────────────────────────────────────────────────────────

/// The `/` page: every item with its toggle/edit/delete links.
pub fn todo_list(items: &[Item]) -> String {
  let mut body = String::new();
  if items.is_empty() {
    body.push_str("<p>You have nothing to do!</p>\n");
  } else {
    body.push_str("<table>\n");
    for item in items {
      let name = escape(&item.name);
      let name_cell = if item.done {
        format!("<td><s>{name}</s></td>")
      } else {
        format!("<td>{name}</td>")
      };
      body.push_str(&format!(
        "<tr>{name_cell}\
         <td><a href=\"/toggle/{id}\">Toggle</a></td>\
         <td><a href=\"/edit/{id}\">Edit</a></td>\
         <td><a href=\"/delete/{id}\">Delete</a></td></tr>\n",
        id = item.id,
      ));
    }
    body.push_str("</table>\n");
  }
  body.push_str("<p><a href=\"/add\">Add Item</a></p>\n");
  page("To-Do List", &body)
}

// ─── Forms ───────────────────────────────────────────────────────────────────

/// The `/add` page, with any errors from a rejected submission.
pub fn add_item(input: &ItemInput, errors: &ValidationErrors) -> String {
  page("Add Item", &item_form("/add", input, errors))
}

/// The `/edit/{id}` page, prefilled with the item's current values.
pub fn edit_item(
  id: ItemId,
  input: &ItemInput,
  errors: &ValidationErrors,
) -> String {
  page("Edit Item", &item_form(&format!("/edit/{id}"), input, errors))
}

/// Render the item form. Field order is fixed by [`FORM_FIELDS`].
fn item_form(
  action: &str,
  input: &ItemInput,
  errors: &ValidationErrors,
) -> String {
  let mut form = format!(
    "<form method=\"post\" action=\"{}\">\n",
    escape(action)
  );
  for field in FORM_FIELDS {
    form.push_str(&field_row(field, input, errors));
  }
  form.push_str("<button type=\"submit\">Save</button>\n</form>\n");
  form.push_str("<p><a href=\"/\">Back to list</a></p>\n");
  form
}

fn field_row(
  field: &str,
  input: &ItemInput,
  errors: &ValidationErrors,
) -> String {
  let error = match errors.get(field) {
    Some(msg) => format!(" <span class=\"error\">{}</span>", escape(msg)),
    None => String::new(),
  };
  match field {
    "name" => {
      let value = escape(input.name.as_deref().unwrap_or(""));
      format!(
        "<p><label for=\"id_name\">Name:</label> \
         <input type=\"text\" name=\"name\" id=\"id_name\" \
         maxlength=\"{NAME_MAX_LEN}\" value=\"{value}\">{error}</p>\n"
      )
    }
    "done" => {
      let checked = if input.done.is_some() { " checked" } else { "" };
      format!(
        "<p><label for=\"id_done\">Done:</label> \
         <input type=\"checkbox\" name=\"done\" id=\"id_done\"{checked}>\
         {error}</p>\n"
      )
    }
    other => unreachable!("unknown form field {other:?}"),
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
