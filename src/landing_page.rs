pub const LANDING_PAGE: &str = r#"<html>
  <head>
    <meta charset="utf-8">
    <title>API de Tradução com Gemini</title>
    <style>
      body { font-family: Arial, sans-serif; max-width: 800px; margin: 0 auto; padding: 20px; }
      code { background: #f4f4f4; padding: 2px 5px; border-radius: 3px; }
      pre { background: #f4f4f4; padding: 10px; border-radius: 5px; }
    </style>
  </head>
  <body>
    <h1>API de Tradução com Google Gemini</h1>
    <h2>Como usar:</h2>

    <h3>1. Tradução</h3>
    <pre>GET /translate/{idioma-origem}-{idioma-destino}/{texto}</pre>
    <p>Exemplo: <a href="/translate/pt-en/ol%C3%A1%20mundo" target="_blank">/translate/pt-en/olá mundo</a></p>

    <h3>2. Detecção de idioma</h3>
    <pre>GET /detect-language/{texto}</pre>
    <p>Exemplo: <a href="/detect-language/hello%20world" target="_blank">/detect-language/hello world</a></p>

    <h3>Códigos de idioma suportados:</h3>
    <ul>
      <li><code>pt</code> - Português</li>
      <li><code>en</code> - Inglês</li>
      <li><code>es</code> - Espanhol</li>
    </ul>
  </body>
</html>
"#;
