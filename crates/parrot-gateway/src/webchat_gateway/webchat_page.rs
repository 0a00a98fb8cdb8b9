//! Webchat HTML renderer for the parameter printer relay.
use super::*;

fn render_example_buttons() -> String {
    example_commands()
        .iter()
        .map(|example| {
            let escaped = escape_html(example);
            format!(r#"<button type="button" class="example" data-example="{escaped}">{escaped}</button>"#)
        })
        .collect::<Vec<_>>()
        .join("\n        ")
}

fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

pub(super) fn render_webchat_page() -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Print Params Chat</title>
  <style>
    :root {{
      color-scheme: light;
      font-family: "IBM Plex Sans", "Segoe UI", sans-serif;
    }}
    body {{
      margin: 0;
      background: linear-gradient(160deg, #f4f6f8 0%, #eef2f7 100%);
      color: #13232f;
    }}
    .container {{
      max-width: 800px;
      margin: 0 auto;
      padding: 1.5rem;
    }}
    h1 {{
      margin: 0 0 0.5rem 0;
      font-size: 1.5rem;
    }}
    p {{
      margin: 0.25rem 0 1rem 0;
      color: #3a4f5f;
    }}
    .panel {{
      background: #ffffff;
      border: 1px solid #d2dde6;
      border-radius: 12px;
      padding: 1rem;
      box-shadow: 0 8px 20px rgba(12, 25, 38, 0.06);
      margin-bottom: 1rem;
    }}
    #transcript {{
      height: 500px;
      overflow-y: auto;
      display: flex;
      flex-direction: column;
      gap: 0.6rem;
    }}
    .bubble {{
      border-radius: 10px;
      padding: 0.6rem 0.8rem;
      max-width: 92%;
      word-break: break-word;
    }}
    .bubble.user {{
      align-self: flex-end;
      background: #0f7d5f;
      color: #ffffff;
      white-space: pre-wrap;
    }}
    .bubble.bot {{
      align-self: flex-start;
      background: #eef3f7;
    }}
    .empty {{
      color: #6b7f8e;
      font-style: italic;
    }}
    label {{
      display: block;
      font-size: 0.85rem;
      margin-bottom: 0.25rem;
      color: #375062;
    }}
    input[type="text"] {{
      width: 100%;
      box-sizing: border-box;
      border: 1px solid #b8c9d6;
      border-radius: 8px;
      padding: 0.55rem 0.7rem;
      font-size: 0.95rem;
      background: #fbfdff;
      color: #13232f;
    }}
    .row {{
      display: grid;
      grid-template-columns: 4fr 1fr;
      gap: 0.8rem;
    }}
    .actions {{
      display: flex;
      gap: 0.5rem;
      flex-wrap: wrap;
      margin-top: 0.8rem;
    }}
    button {{
      border: 0;
      border-radius: 8px;
      background: #0f7d5f;
      color: #ffffff;
      padding: 0.55rem 0.9rem;
      font-weight: 600;
      cursor: pointer;
    }}
    button.secondary, button.example {{
      background: #3f5f74;
    }}
    button:disabled {{
      cursor: wait;
      opacity: 0.6;
    }}
    pre {{
      margin: 0.4rem 0;
      background: #0f1f2b;
      color: #d9ecf7;
      border-radius: 10px;
      padding: 0.8rem;
      overflow: auto;
      white-space: pre-wrap;
      font-size: 0.85rem;
    }}
  </style>
</head>
<body>
  <div class="container">
    <h1>Print Params Chat</h1>
    <p>Each message is split shell-style and passed to <code>print-params</code>; its report appears in the chat. Try <code>--help</code> for the option list.</p>
    <div class="panel">
      <div id="transcript" aria-live="polite"></div>
    </div>
    <div class="panel">
      <label for="message">Command arguments</label>
      <div class="row">
        <input id="message" type="text" placeholder="e.g. hello world or --name John --age 25" autocomplete="off" />
        <button id="send" type="button">Send</button>
      </div>
      <div class="actions">
        <button id="clear" type="button" class="secondary">Clear Chat</button>
      </div>
    </div>
    <div class="panel">
      <label>Try these examples:</label>
      <div class="actions">
        {example_buttons}
      </div>
    </div>
  </div>
  <script>
    const relayEndpoint = "{relay_endpoint}";
    const clearEndpoint = "{clear_endpoint}";
    const transcript = document.getElementById("transcript");
    const messageInput = document.getElementById("message");
    const sendButton = document.getElementById("send");
    const clearButton = document.getElementById("clear");
    let history = [];

    function escapeHtml(raw) {{
      return raw
        .replaceAll("&", "&amp;")
        .replaceAll("<", "&lt;")
        .replaceAll(">", "&gt;")
        .replaceAll('"', "&quot;");
    }}

    function renderInline(text) {{
      return escapeHtml(text)
        .replace(/\*\*([^*]+)\*\*/g, "<strong>$1</strong>")
        .replace(/`([^`]+)`/g, "<code>$1</code>")
        .replaceAll("\n", "<br />");
    }}

    function renderMarkdown(text) {{
      const parts = text.split("```");
      return parts
        .map((part, index) => index % 2 === 1
          ? "<pre>" + escapeHtml(part.replace(/^\n/, "").replace(/\n$/, "")) + "</pre>"
          : renderInline(part))
        .join("");
    }}

    function renderTranscript() {{
      transcript.innerHTML = "";
      if (history.length === 0) {{
        transcript.innerHTML = '<div class="empty">No messages yet.</div>';
        return;
      }}
      for (const [userInput, response] of history) {{
        const user = document.createElement("div");
        user.className = "bubble user";
        user.textContent = userInput;
        const bot = document.createElement("div");
        bot.className = "bubble bot";
        bot.innerHTML = renderMarkdown(response);
        transcript.append(user, bot);
      }}
      transcript.scrollTop = transcript.scrollHeight;
    }}

    async function postJson(endpoint, payload) {{
      const response = await fetch(endpoint, {{
        method: "POST",
        headers: {{ "Content-Type": "application/json" }},
        body: JSON.stringify(payload)
      }});
      const body = await response.json();
      if (!response.ok) {{
        throw new Error(body.error ? body.error.message : "status=" + response.status);
      }}
      return body;
    }}

    function applyTranscript(body) {{
      history = body.history;
      messageInput.value = body.input;
      renderTranscript();
    }}

    async function sendMessage() {{
      const message = messageInput.value;
      if (sendButton.disabled) {{
        return;
      }}
      sendButton.disabled = true;
      try {{
        applyTranscript(await postJson(relayEndpoint, {{ message, history }}));
      }} catch (error) {{
        history = history.concat([[message, "**request failed:** " + String(error.message || error)]]);
        renderTranscript();
      }} finally {{
        sendButton.disabled = false;
        messageInput.focus();
      }}
    }}

    async function clearChat() {{
      try {{
        applyTranscript(await postJson(clearEndpoint, {{}}));
      }} catch (error) {{
        history = [];
        messageInput.value = "";
        renderTranscript();
      }}
    }}

    sendButton.addEventListener("click", sendMessage);
    messageInput.addEventListener("keydown", (event) => {{
      if (event.key === "Enter") {{
        sendMessage();
      }}
    }});
    clearButton.addEventListener("click", clearChat);
    for (const button of document.querySelectorAll("button.example")) {{
      button.addEventListener("click", () => {{
        messageInput.value = button.dataset.example;
        messageInput.focus();
      }});
    }}

    renderTranscript();
  </script>
</body>
</html>
"#,
        example_buttons = render_example_buttons(),
        relay_endpoint = RELAY_ENDPOINT,
        clear_endpoint = CLEAR_ENDPOINT,
    )
}
