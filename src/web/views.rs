//! Server-rendered HTML pages. Small enough that a template engine would be
//! overhead; everything goes through `escape` before interpolation.

use crate::models::day_summary::UserSummary;
use crate::models::event::Event;
use axum::response::Html;
use std::fmt::Write;

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html lang=\"es\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        body
    ))
}

fn nav() -> &'static str {
    "<nav><a href=\"/fichar\">Fichar</a> | <a href=\"/tabla\">Fichajes</a> | \
     <a href=\"/resumen\">Resumen</a> | <a href=\"/exportar\">Exportar CSV</a> | \
     <a href=\"/logout\">Salir</a></nav>"
}

pub fn login_page() -> Html<String> {
    layout(
        "Fichaje - Login",
        "<h1>Fichaje</h1>\n\
         <form method=\"post\" action=\"/\">\n\
         <label for=\"nombre\">Nombre:</label>\n\
         <input type=\"text\" id=\"nombre\" name=\"nombre\" autofocus>\n\
         <button type=\"submit\">Entrar</button>\n\
         </form>",
    )
}

pub fn clock_page(user: &str) -> Html<String> {
    let mut body = String::new();
    let _ = write!(body, "{}\n<h1>Hola, {}</h1>\n", nav(), escape(user));
    body.push_str("<form method=\"post\" action=\"/fichar\">\n");
    for tipo in ["Entrada", "Salida", "Pausa", "Fin pausa"] {
        let _ = write!(
            body,
            "<button type=\"submit\" name=\"tipo\" value=\"{tipo}\">{tipo}</button>\n"
        );
    }
    body.push_str("</form>");
    layout("Fichaje - Fichar", &body)
}

pub fn table_page(events: &[Event]) -> Html<String> {
    let mut body = String::new();
    let _ = write!(body, "{}\n<h1>Fichajes</h1>\n", nav());
    body.push_str(
        "<table border=\"1\">\n<tr><th>Usuario</th><th>Tipo</th><th>Fecha</th><th>Hora</th></tr>\n",
    );
    for ev in events {
        let _ = write!(
            body,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape(&ev.user),
            ev.kind.to_db_str(),
            ev.date_str(),
            ev.time_str(),
        );
    }
    body.push_str("</table>");
    layout("Fichaje - Fichajes", &body)
}

pub fn summary_page(summaries: &[UserSummary]) -> Html<String> {
    let mut body = String::new();
    let _ = write!(body, "{}\n<h1>Resumen</h1>\n", nav());

    for user in summaries {
        let _ = write!(body, "<h2>{}</h2>\n", escape(&user.user));
        body.push_str(
            "<table border=\"1\">\n<tr><th>Fecha</th><th>Entrada</th><th>Salida</th>\
             <th>Horas trabajadas</th><th>Horas de pausa</th><th>Estado</th></tr>\n",
        );
        for day in &user.days {
            let fmt_time = |t: Option<chrono::NaiveTime>| match t {
                Some(t) => t.format("%H:%M:%S").to_string(),
                None => "-".to_string(),
            };
            let _ = write!(
                body,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{:.2}</td><td>{:.2}</td><td>{}</td></tr>\n",
                day.date.format("%Y-%m-%d"),
                fmt_time(day.entry),
                fmt_time(day.exit),
                day.worked_hours,
                day.pause_hours,
                if day.complete { "completo" } else { "incompleto" },
            );
        }
        body.push_str("</table>\n");
    }

    layout("Fichaje - Resumen", &body)
}
