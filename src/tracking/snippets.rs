//! Static page snippets for each provider.
//!
//! Ids are inserted without escaping; only the site owner sets them and they
//! pass [`Provider::validate`] on save.

use super::Provider;

pub fn generate_code(provider: Provider, id: &str) -> String {
    match provider {
        Provider::FacebookPixel => facebook_pixel(id),
        Provider::GoogleAnalytics => google_analytics(id),
        Provider::GoogleTagManager => google_tag_manager(id),
    }
}

fn facebook_pixel(pixel_id: &str) -> String {
    format!(
        r#"
<!-- Facebook Pixel Code -->
<script>
!function(f,b,e,v,n,t,s)
{{if(f.fbq)return;n=f.fbq=function(){{n.callMethod?
n.callMethod.apply(n,arguments):n.queue.push(arguments)}};
if(!f._fbq)f._fbq=n;n.push=n;n.loaded=!0;n.version='2.0';
n.queue=[];t=b.createElement(e);t.async=!0;
t.src=v;s=b.getElementsByTagName(e)[0];
s.parentNode.insertBefore(t,s)}}(window, document,'script',
'https://connect.facebook.net/en_US/fbevents.js');
fbq('init', '{pixel_id}');
fbq('track', 'PageView');
</script>
<noscript><img height="1" width="1" style="display:none"
src="https://www.facebook.com/tr?id={pixel_id}&ev=PageView&noscript=1"/></noscript>
<!-- End Facebook Pixel Code -->"#
    )
}

fn google_analytics(measurement_id: &str) -> String {
    format!(
        r#"
<!-- Google Analytics 4 -->
<script async src="https://www.googletagmanager.com/gtag/js?id={measurement_id}"></script>
<script>
  window.dataLayer = window.dataLayer || [];
  function gtag(){{dataLayer.push(arguments);}}
  gtag('js', new Date());
  gtag('config', '{measurement_id}');
</script>
<!-- End Google Analytics 4 -->"#
    )
}

fn google_tag_manager(container_id: &str) -> String {
    format!(
        r#"
<!-- Google Tag Manager -->
<script>(function(w,d,s,l,i){{w[l]=w[l]||[];w[l].push({{'gtm.start':
new Date().getTime(),event:'gtm.js'}});var f=d.getElementsByTagName(s)[0],
j=d.createElement(s),dl=l!='dataLayer'?'&l='+l:'';j.async=true;j.src=
'https://www.googletagmanager.com/gtm.js?id='+i+dl;f.parentNode.insertBefore(j,f);
}})(window,document,'script','dataLayer','{container_id}');</script>
<!-- End Google Tag Manager -->"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facebook_snippet_uses_id_twice() {
        let code = generate_code(Provider::FacebookPixel, "123456789012345");
        assert!(code.starts_with("\n<!-- Facebook Pixel Code -->"));
        assert_eq!(code.matches("123456789012345").count(), 2);
        assert!(code.contains("{if(f.fbq)return;"));
    }

    #[test]
    fn tag_manager_snippet_braces_survive_formatting() {
        let code = generate_code(Provider::GoogleTagManager, "GTM-AB12CD3");
        assert!(code.contains("w[l].push({'gtm.start':"));
        assert!(code.contains("'dataLayer','GTM-AB12CD3');</script>"));
        assert!(code.ends_with("<!-- End Google Tag Manager -->"));
    }

    #[test]
    fn analytics_snippet() {
        let code = generate_code(Provider::GoogleAnalytics, "G-ABCD123456");
        assert!(code.contains("gtag/js?id=G-ABCD123456"));
        assert!(code.contains("function gtag(){dataLayer.push(arguments);}"));
    }
}
